//! Help document generation.
//!
//! A generated project gets a `HELP.md` that points the user at the
//! documentation of what they asked for:
//!
//! 1. A [`HelpDocument`] is created for the request.
//! 2. [`HelpDocumentCustomizer`]s populate it; the main one is
//!    [`RequestedDependenciesHelpDocumentCustomizer`], which adds the links of
//!    each requested dependency.
//! 3. The document is rendered through a
//!    [`TemplateRenderer`](crate::templating::TemplateRenderer) and written by
//!    [`HelpDocumentContributor`] when it is not empty.
//!
//! # Examples
//!
//! ```rust,no_run
//! use initializr_help::documentation::{
//!     HelpDocument, HelpDocumentCustomizer, RequestedDependenciesHelpDocumentCustomizer,
//! };
//! use initializr_help::metadata::InitializrMetadata;
//! use initializr_help::project::ProjectDescription;
//! use initializr_help::templating::TemplateRenderer;
//!
//! # fn main() -> anyhow::Result<()> {
//! let metadata = InitializrMetadata::load("catalog.toml".as_ref())?;
//! let description = ProjectDescription::new().with_dependencies(["web"]);
//!
//! let mut document = HelpDocument::new();
//! RequestedDependenciesHelpDocumentCustomizer::new(&description, &metadata)
//!     .customize(&mut document);
//!
//! print!("{}", document.render(&TemplateRenderer::new()?)?);
//! # Ok(())
//! # }
//! ```

pub mod contributor;
pub mod customizer;
pub mod getting_started;
pub mod help_document;
pub mod section;


pub use contributor::{HELP_DOCUMENT_FILE, HelpDocumentContributor};
pub use customizer::{
    BuildSystemHelpDocumentCustomizer, HelpDocumentCustomizer,
    RequestedDependenciesHelpDocumentCustomizer,
};
pub use getting_started::{GettingStartedLink, GettingStartedSection};
pub use help_document::HelpDocument;
pub use section::{BulletedSection, Section};
