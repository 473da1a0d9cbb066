use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for gitver.
///
/// Covers the output location, the embedded fallback triple, and the
/// failure behavior. Every field has a default so the tool runs without
/// any configuration file present.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub fallback: FallbackConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            fallback: FallbackConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Configuration for the generated file location.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

fn default_output_path() -> String {
    "src/embedded.rs".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: default_output_path(),
        }
    }
}

/// The version triple embedded when git data is unavailable.
///
/// Replaces the original tool's process-global defaults: the fallback is
/// explicit configuration threaded into the emitter.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FallbackConfig {
    #[serde(default = "default_fallback_rev")]
    pub rev: String,

    #[serde(default = "default_fallback_version")]
    pub version: String,

    #[serde(default = "default_fallback_timestamp")]
    pub timestamp: String,
}

fn default_fallback_rev() -> String {
    "0000000".to_string()
}

fn default_fallback_version() -> String {
    "v0.0.0-pre0+g0000000".to_string()
}

fn default_fallback_timestamp() -> String {
    "1970-01-01T00:00:00+00:00".to_string()
}

impl Default for FallbackConfig {
    fn default() -> Self {
        FallbackConfig {
            rev: default_fallback_rev(),
            version: default_fallback_version(),
            timestamp: default_fallback_timestamp(),
        }
    }
}

/// Configuration for failure behavior.
///
/// By default git query failures exit with code 0 so a missing repository
/// never breaks a build; CI setups opt into a hard failure here or via
/// the `--fail` flag or `GITVER_FAIL` environment variable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub fail_on_error: bool,

    #[serde(default = "default_failure_exit_code")]
    pub failure_exit_code: i32,
}

fn default_failure_exit_code() -> i32 {
    1
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            fail_on_error: false,
            failure_exit_code: default_failure_exit_code(),
        }
    }
}

impl BehaviorConfig {
    /// Resolves the exit code used when git data cannot be retrieved.
    ///
    /// Failure exits are requested by the `--fail` flag, by
    /// `fail_on_error` in the configuration, or by the `GITVER_FAIL`
    /// environment variable holding anything other than empty or
    /// "false". Without such a request, failures still end the run but
    /// exit with code 0.
    ///
    /// # Arguments
    /// * `fail_flag` - The CLI `--fail` flag
    /// * `env_value` - The value of `GITVER_FAIL`, if the variable is set
    ///
    /// # Returns
    /// The configured failure exit code when failure was requested, 0 otherwise
    pub fn effective_failure_code(&self, fail_flag: bool, env_value: Option<&str>) -> i32 {
        let env_requested = env_value.is_some_and(|value| !value.is_empty() && value != "false");
        if fail_flag || self.fail_on_error || env_requested {
            self.failure_exit_code
        } else {
            0
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitver.toml` in current directory
/// 3. `~/.config/.gitver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitver.toml").exists() {
        fs::read_to_string("./gitver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
