//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::error::Error as _;

use geodata_cli::CliError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    init_logging();
    match geodata_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("thailand-geodata: {}", error_chain(&err));
            std::process::exit(1);
        }
    }
}

/// Send diagnostics to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Fails only when a global subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn error_chain(err: &CliError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
