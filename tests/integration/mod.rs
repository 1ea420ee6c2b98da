//! Integration test suite for initializr-help
//!
//! End-to-end tests that drive the `initializr-help` binary against catalog
//! files in temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: HELP.md generation, stdout mode, template overrides, errors
//! - **list**: Catalog listing in text and JSON

mod generate;
mod list;

use std::path::PathBuf;

use assert_cmd::Command;
use initializr_help::test_utils::SAMPLE_CATALOG;
use tempfile::TempDir;

/// Temporary directory holding `catalog.toml`.
pub struct CatalogFixture {
    pub dir: TempDir,
    pub catalog: PathBuf,
}

impl CatalogFixture {
    pub fn sample() -> Self {
        Self::with_content(SAMPLE_CATALOG)
    }

    pub fn with_content(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.toml");
        std::fs::write(&catalog, content).unwrap();
        Self {
            dir,
            catalog,
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("initializr-help").unwrap();
        cmd.env_remove("RUST_LOG")
            .env_remove("INITIALIZR_HELP_CATALOG")
            .env("NO_COLOR", "1")
            .current_dir(self.dir.path());
        cmd
    }
}
