use std::path::Path;

use anyhow::Result;
use chrono::SecondsFormat;
use clap::Parser;

use gitver::boundary::BoundaryWarning;
use gitver::git_ops::GitRepo;
use gitver::{config, describe, emit, ui, version};

#[derive(clap::Parser)]
#[command(
    name = "gitver",
    about = "Generate embeddable version metadata from the git working tree",
    disable_version_flag = true
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Write the generated file to this path")]
    output: Option<String>,

    #[arg(long, help = "Operate on the repository containing this path")]
    repo: Option<String>,

    #[arg(
        short,
        long,
        help = "Exit with the configured failure code when git data cannot be retrieved"
    )]
    fail: bool,

    #[arg(
        short = 'V',
        long,
        help = "Print the embedded revision, version, and timestamp"
    )]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("{}", gitver::embedded::GIT_REV);
        println!("{}", gitver::embedded::GIT_VERSION);
        println!("{}", gitver::embedded::GIT_TIMESTAMP);
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Failure exits are opt-in: the flag, the environment, or the config
    // file requests them; otherwise failures still exit, but with code 0
    // so a missing repository never breaks a build
    let failure_code = config
        .behavior
        .effective_failure_code(args.fail, std::env::var("GITVER_FAIL").ok().as_deref());

    // Open the repository
    let repo = {
        let result = match args.repo.as_deref() {
            Some(path) => GitRepo::at(Path::new(path)),
            None => GitRepo::new(),
        };
        match result {
            Ok(repo) => repo,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(failure_code);
            }
        }
    };

    // Capture the describe string and the full HEAD revision
    ui::display_status("Reading version metadata from git...");
    let desc = match repo.describe() {
        Ok(desc) => desc,
        Err(e) => {
            ui::display_error(&format!("Failed to get git description: {}", e));
            std::process::exit(failure_code);
        }
    };
    let rev = match repo.head_rev() {
        Ok(rev) => rev,
        Err(e) => {
            ui::display_error(&format!("Failed to get git revision: {}", e));
            std::process::exit(failure_code);
        }
    };

    // Derive the version string. A numeric field failing to parse inside a
    // matched pattern means git emitted something we do not understand;
    // report it loudly instead of embedding a guess
    let kind = match describe::classify(&desc) {
        Ok(kind) => kind,
        Err(e) => {
            ui::display_error(&format!(
                "Unexpected git description '{}': {}",
                desc, e
            ));
            std::process::exit(failure_code);
        }
    };
    let composed = version::compose(&kind);
    if composed.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::UntaggedTree {
            describe: desc.clone(),
        });
    }

    // Timestamp resolution failure is non-fatal; a dirty tree cannot be
    // resolved as a revision, so fall back to the current time
    let timestamp = match repo.commit_timestamp(&desc) {
        Ok(ts) => ts,
        Err(_) => {
            ui::display_boundary_warning(&BoundaryWarning::TimestampUnavailable {
                describe: desc.clone(),
            });
            chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
        }
    };

    let info = emit::VersionInfo {
        rev,
        version: composed,
        timestamp,
    };

    let output_path = args.output.unwrap_or_else(|| config.output.path.clone());
    if let Err(e) = emit::write(Path::new(&output_path), &info, &config.fallback) {
        ui::display_error(&format!("Failed to write '{}': {}", output_path, e));
        std::process::exit(1);
    }

    let embedded_version = if info.version.is_empty() {
        config.fallback.version.as_str()
    } else {
        info.version.as_str()
    };
    ui::display_success(&format!(
        "Embedded {} ({}) into {}",
        embedded_version, info.rev, output_path
    ));

    Ok(())
}
