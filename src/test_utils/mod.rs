//! Test utilities for initializr-help
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration test suites.
//!
//! # Example
//!
//! ```rust,no_run
//! use initializr_help::metadata::Link;
//! use initializr_help::test_utils::{MetadataTestBuilder, create_dependency};
//!
//! let mut builder = MetadataTestBuilder::new();
//! builder.add_dependency_group(
//!     "web",
//!     [create_dependency("web", [Link::create("guide", "https://example.com")])],
//! );
//! let metadata = builder.build();
//! assert!(metadata.contains("web"));
//! ```

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::metadata::{Dependency, DependencyGroup, InitializrMetadata, Link};

/// A small catalog covering every link category, in the TOML catalog format.
pub const SAMPLE_CATALOG: &str = r#"
[[groups]]
name = "Web"

[[groups.dependencies]]
id = "web"
name = "Spring Web"
group-id = "org.springframework.boot"
artifact-id = "spring-boot-starter-web"

[[groups.dependencies.links]]
rel = "guide"
href = "https://spring.io/guides/gs/rest-service/"
description = "Building a RESTful Web Service"

[[groups.dependencies.links]]
rel = "reference"
href = "https://docs.spring.io/spring-boot/{bootVersion}/reference/web/servlet.html"

[[groups.dependencies]]
id = "actuator"
name = "Spring Boot Actuator"
group-id = "org.springframework.boot"
artifact-id = "spring-boot-starter-actuator"

[[groups.dependencies.links]]
rel = "guide"
href = "https://spring.io/guides/gs/actuator-service/"
description = "Building a RESTful Web Service with Spring Boot Actuator"

[[groups.dependencies.links]]
rel = "guide"
href = "https://spring.io/guides/gs/spring-boot-docker/"
description = "Spring Boot and Docker"

[[groups]]
name = "SQL"

[[groups.dependencies]]
id = "flyway"
name = "Flyway Migration"
group-id = "org.flywaydb"
artifact-id = "flyway-core"

[[groups.dependencies.links]]
rel = "home"
href = "https://flywaydb.org"
"#;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG` when set, otherwise stays
/// silent. Safe to call from every test.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Create a dependency with `com.example` coordinates and the given links.
pub fn create_dependency(id: &str, links: impl IntoIterator<Item = Link>) -> Dependency {
    let mut dependency = Dependency::with_id(id, "com.example", id);
    dependency.links.extend(links);
    dependency
}

/// Builds catalogs for tests without going through TOML.
#[derive(Debug, Default, Clone)]
pub struct MetadataTestBuilder {
    groups: Vec<DependencyGroup>,
}

impl MetadataTestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dependency_group(
        &mut self,
        name: &str,
        dependencies: impl IntoIterator<Item = Dependency>,
    ) -> &mut Self {
        self.groups.push(DependencyGroup::new(name, dependencies.into_iter().collect()));
        self
    }

    /// Build the catalog.
    ///
    /// # Panics
    ///
    /// Panics when the groups do not form a valid catalog.
    #[must_use]
    pub fn build(&self) -> InitializrMetadata {
        InitializrMetadata::from_groups(self.groups.clone())
            .unwrap_or_else(|e| panic!("invalid test catalog: {e}"))
    }
}
