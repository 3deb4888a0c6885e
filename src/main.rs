// CocosProject - main.rs
//
// CLI entry point. Handles:
// 1. CLI argument parsing
// 2. Tool config loading and logging initialisation
// 3. Project inspection and report output

use clap::Parser;
use cocos_project::app::inspect::{self, Report, TextReport};
use cocos_project::platform::config::{self, PlatformPaths};
use cocos_project::util;
use std::path::PathBuf;
use std::process::ExitCode;

/// Locate a game project and list the platforms it can be built for here.
#[derive(Parser, Debug)]
#[command(name = "cocos-project", version, about)]
struct Cli {
    /// Directory inside the project (defaults to the current directory).
    path: Option<PathBuf>,

    /// Target platform to select (android, ios, mac, web, win32, linux).
    #[arg(short = 'p', long = "platform")]
    platform: Option<String>,

    /// Print the report as JSON.
    #[arg(long = "json")]
    json: bool,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_dir);
    let (app_config, config_warnings) = config::load_config(&config_dir);

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning; using defaults for this value");
    }

    tracing::debug!(version = util::constants::APP_VERSION, ?cli, "Starting");

    let start = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let inspection = match inspect::inspect(&start, cli.platform.as_deref(), &app_config) {
        Ok(i) => i,
        Err(e) => {
            tracing::error!(error = %e, "Inspection failed");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match Report::new(&inspection).to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialise report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", TextReport(&inspection));
    }

    ExitCode::SUCCESS
}
