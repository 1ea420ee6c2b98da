//! Template error handling for help document rendering
//!
//! Tera reports failures as a chain of nested errors where the useful part is
//! usually the innermost one. [`TemplateError`] keeps the template name and a
//! flattened message so the CLI can print something readable.

use thiserror::Error;

/// Errors raised while loading or rendering help document templates
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template registered under this name
    #[error("Template '{name}' not found")]
    NotFound {
        /// Requested template name
        name: String,
    },

    /// A template failed to parse
    #[error("Template syntax error in '{name}'")]
    SyntaxError {
        /// Template name
        name: String,
        /// Flattened Tera error chain
        message: String,
    },

    /// A template parsed but failed to render
    #[error("Failed to render template '{name}'")]
    RenderFailed {
        /// Template name
        name: String,
        /// Flattened Tera error chain
        message: String,
    },
}

impl TemplateError {
    pub(crate) fn syntax(name: impl Into<String>, error: &tera::Error) -> Self {
        Self::SyntaxError {
            name: name.into(),
            message: format_tera_error(error),
        }
    }

    pub(crate) fn render(name: impl Into<String>, error: &tera::Error) -> Self {
        Self::RenderFailed {
            name: name.into(),
            message: format_tera_error(error),
        }
    }

    /// The underlying Tera message, or a hint for missing templates.
    pub fn details(&self) -> String {
        match self {
            TemplateError::NotFound {
                name,
            } => format!("Expected a built-in template or an override named '{name}.tera'"),
            TemplateError::SyntaxError {
                message,
                ..
            }
            | TemplateError::RenderFailed {
                message,
                ..
            } => message.clone(),
        }
    }
}

/// Flatten a Tera error chain into a single message.
///
/// Tera wraps the root cause in "Failed to render" layers; each layer's
/// message is kept once, outermost first.
pub fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut current: Option<&dyn Error> = error.source();
    while let Some(err) = current {
        let message = err.to_string();
        if !messages.contains(&message) {
            messages.push(message);
        }
        current = err.source();
    }

    messages.retain(|m| !m.trim().is_empty());
    if messages.is_empty() {
        "Template error (no details reported by Tera)".to_string()
    } else {
        messages.join("\n  → ")
    }
}
