//! ecw CLI - Use CMake more efficiently
//!
//! Entry point for the ecw command-line application.

use anyhow::Result;
use clap::Parser;

use ecw::cli::output::display_error;
use ecw::cli::Cli;
use ecw::error::exit_code;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(exit_code(&e));
        }
    }
}
