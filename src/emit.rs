//! Rendering and writing of the generated source file

use std::fs;
use std::path::Path;

use crate::config::FallbackConfig;
use crate::error::Result;

/// The version triple embedded into the generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Full revision hash of HEAD
    pub rev: String,
    /// Composed version string; empty when the description was unrecognizable
    pub version: String,
    /// RFC 3339 timestamp of the described commit (or the current time)
    pub timestamp: String,
}

/// Renders the generated Rust source for a version triple.
///
/// An empty composed version means the working tree had no recognizable
/// tag; the fallback version from configuration is embedded instead, so
/// consumers always see a well-formed string. Revision and timestamp are
/// passed through as captured.
///
/// # Arguments
/// * `info` - The captured version triple
/// * `fallback` - Embedded defaults from configuration
pub fn render(info: &VersionInfo, fallback: &FallbackConfig) -> String {
    let version = if info.version.is_empty() {
        &fallback.version
    } else {
        &info.version
    };

    format!(
        "// Code generated by gitver. DO NOT EDIT.\n\
         \n\
         pub const GIT_REV: &str = \"{}\";\n\
         pub const GIT_VERSION: &str = \"{}\";\n\
         pub const GIT_TIMESTAMP: &str = \"{}\";\n",
        info.rev, version, info.timestamp
    )
}

/// Renders the version triple and writes it to the output path.
///
/// Creates or overwrites the file in place.
///
/// # Arguments
/// * `path` - Destination for the generated file
/// * `info` - The captured version triple
/// * `fallback` - Embedded defaults from configuration
///
/// # Returns
/// * `Ok(())` - File written
/// * `Err` - On any I/O failure
pub fn write(path: &Path, info: &VersionInfo, fallback: &FallbackConfig) -> Result<()> {
    fs::write(path, render(info, fallback))?;
    Ok(())
}
