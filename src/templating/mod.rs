//! Tera-based rendering for help documents.
//!
//! Every help document section is rendered from a named template. The
//! built-in templates produce Markdown; they receive the section's entries
//! under the `items` key:
//!
//! ```text
//! ### Guides
//! The following guides illustrate how to use some features concretely:
//!
//! {% for link in items %}* [{{ link.description }}]({{ link.href }})
//! {% endfor %}
//! ```

pub mod error;
pub mod renderer;


pub use error::{TemplateError, format_tera_error};
pub use renderer::{
    ADDITIONAL_LINKS_TEMPLATE, GUIDES_TEMPLATE, NEXT_STEPS_TEMPLATE,
    REFERENCE_DOCUMENTATION_TEMPLATE, TemplateRenderer, WARNINGS_TEMPLATE,
};
