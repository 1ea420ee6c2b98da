//! Command-line interface for initializr-help.
//!
//! # Commands
//!
//! - `generate` - Write HELP.md for a set of requested dependencies
//! - `list` - Show the catalog and how many links each dependency has
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only report errors
//!
//! The catalog is passed with `--catalog <file>` or the
//! `INITIALIZR_HELP_CATALOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! initializr-help generate --catalog catalog.toml -d web,actuator --platform-version 3.2.0
//! initializr-help generate --catalog catalog.toml -d web --build maven --stdout
//! initializr-help list --catalog catalog.toml --format json
//! ```

pub mod generate;
pub mod list;


use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::metadata::InitializrMetadata;

/// Runtime configuration derived from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Tracing filter directive; `None` disables logging.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Logs go to
    /// stderr so that `--stdout` and `list` output stay clean.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("initializr_help={level}"))
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

#[derive(Parser)]
#[command(
    name = "initializr-help",
    about = "Generate the Getting Started HELP.md of a scaffolded project",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write HELP.md for the requested dependencies
    Generate(generate::GenerateCommand),
    /// List the dependencies of a catalog
    List(list::ListCommand),
}

/// Location of the dependency catalog, shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Dependency catalog (TOML)
    #[arg(long, env = "INITIALIZR_HELP_CATALOG")]
    pub catalog: PathBuf,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<InitializrMetadata> {
        InitializrMetadata::load(&self.catalog)
    }
}

impl Cli {
    /// Execute the parsed command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
        }
    }

    /// Execute with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Generate(cmd) => cmd.execute(),
            Commands::List(cmd) => cmd.execute(),
        }
    }
}
