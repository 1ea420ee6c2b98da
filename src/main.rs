//! initializr-help CLI entry point
//!
//! Parses the command line, runs the command and prints errors with
//! suggestions.

use anyhow::Result;
use clap::Parser;
use initializr_help::cli;
use initializr_help::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
