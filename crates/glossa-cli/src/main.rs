//! Glossa CLI
//!
//! Main entry point for the `glossa` binary.

use std::process::ExitCode;

use clap::Parser;
use glossa_cli::cli::Cli;
use glossa_cli::CliError;
use glossa_common_log::{LogConfig, LogLevel};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("error[{}]: {e}", e.code());
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    cli.execute(config)
}

fn init_tracing(cli: &Cli) {
    let mut config = LogConfig::from_env();
    if cli.verbose > 0 || cli.quiet {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = glossa_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
