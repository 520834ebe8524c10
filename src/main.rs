//! passkeep - a personal credential vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use passkeep::cli::output;
use passkeep::cli::{execute, Cli};
use passkeep::core::constants;
use passkeep::error::{Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("passkeep=debug")
        } else {
            EnvFilter::new("passkeep=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.file) {
        let suggestion = match &e {
            Error::NoMatch { .. } => Some("run: passkeep list"),
            Error::Store(StoreError::Write { .. }) => {
                Some("check that the directory exists and is writable")
            }
            Error::Config(_) => Some("fix or remove the config file, or set PASSKEEP_CONFIG"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
