//! initializr-help - Getting Started documentation for scaffolded projects
//!
//! When a project skeleton is generated, the user picks dependencies from a
//! catalog. This crate turns that selection into a `HELP.md` listing the
//! reference documentation, guides and other links of each dependency.
//!
//! # Core Modules
//!
//! - [`metadata`] - Dependency catalog: dependencies, links, TOML loading
//! - [`project`] - The generation request: requested ids, platform version, build system
//! - [`documentation`] - Help document model, customizers and HELP.md contributor
//! - [`templating`] - Tera templates used to render the document
//! - [`core`] - Error types and user-friendly error reporting
//! - [`cli`] - Command-line interface
//!
//! # Link Selection
//!
//! Every link has a `rel`. `reference` links go to "Reference Documentation",
//! `guide` links to "Guides", anything else to "Additional Links". For each
//! requested dependency and each of these categories, a link is listed only
//! when the dependency has exactly one link of the category; its text is the
//! link description or, failing that, the dependency name.
//!
//! # Example
//!
//! ```rust,no_run
//! use initializr_help::documentation::{
//!     HelpDocument, HelpDocumentCustomizer, RequestedDependenciesHelpDocumentCustomizer,
//! };
//! use initializr_help::metadata::{Dependency, DependencyGroup, InitializrMetadata, Link};
//! use initializr_help::project::ProjectDescription;
//!
//! # fn main() -> anyhow::Result<()> {
//! let web = Dependency::with_id("web", "org.springframework.boot", "spring-boot-starter-web")
//!     .named("Spring Web")
//!     .with_link(Link::create("reference", "https://docs.spring.io/spring-boot/web.html"));
//! let metadata = InitializrMetadata::from_groups(vec![DependencyGroup::new("Web", vec![web])])?;
//! let description = ProjectDescription::new().with_dependencies(["web"]);
//!
//! let mut document = HelpDocument::new();
//! RequestedDependenciesHelpDocumentCustomizer::new(&description, &metadata).customize(&mut document);
//! assert_eq!(document.getting_started().reference_docs().items()[0].description, "Spring Web");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod documentation;
pub mod metadata;
pub mod project;
pub mod templating;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
