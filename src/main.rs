//! devlog - Entry Point

use clap::{Parser, Subcommand};
use devlog::model::{AppError, Platform};
use devlog::session::SessionOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// devlog - tail Android and iOS simulator device logs in the terminal
#[derive(Parser, Debug)]
#[command(name = "devlog")]
#[command(version)]
#[command(about = "TUI application for tailing Android and iOS simulator device logs")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Stream device logs into an interactive viewer
    Log {
        /// Device platform to read logs from
        #[arg(short, long, value_enum)]
        platform: Platform,

        /// Start with this filter applied
        #[arg(long)]
        filter: Option<String>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        no_color: bool,
    },
}

fn run(args: Args) -> Result<(), AppError> {
    let Command::Log {
        platform,
        filter,
        config,
        no_color,
    } = args.command;

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = devlog::config::load_config_with_precedence(config)?;
        let merged = devlog::config::merge_config(config_file)?;
        let with_env = devlog::config::apply_env_overrides(merged);
        devlog::config::apply_cli_overrides(with_env, no_color)
    };

    devlog::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let options = SessionOptions {
        platform,
        initial_filter: filter,
    };
    devlog::session::run(&options, &config).inspect_err(|e| error!(error = %e, "session failed"))
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("devlog: {e}");
            ExitCode::FAILURE
        }
    }
}
