//! Error handling for initializr-help
//!
//! This module provides the error types and user-friendly error reporting used
//! by the catalog loader, the renderer and the command-line interface.
//!
//! # Architecture
//!
//! - [`HelpError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! Customizers never fail: everything that can go wrong happens while loading
//! the catalog, validating the request or rendering the document.
//!
//! # Examples
//!
//! ```rust,no_run
//! use initializr_help::core::{HelpError, ErrorContext};
//!
//! let context = ErrorContext::new(HelpError::CatalogNotFound {
//!     path: "catalog.toml".to_string(),
//! })
//! .with_suggestion("Pass --catalog or set INITIALIZR_HELP_CATALOG");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::templating::TemplateError;

/// The main error type for initializr-help operations
#[derive(Error, Debug)]
pub enum HelpError {
    /// The catalog file does not exist
    #[error("Dependency catalog not found: {path}")]
    CatalogNotFound {
        /// Path that was looked up
        path: String,
    },

    /// The catalog file is not valid TOML or does not match the catalog schema
    #[error("Invalid dependency catalog {file}: {reason}")]
    CatalogParseError {
        /// Catalog file being parsed
        file: String,
        /// Parser message
        reason: String,
    },

    /// The catalog parsed but its content is inconsistent
    #[error("Dependency catalog validation failed: {reason}")]
    CatalogValidationError {
        /// What is wrong with the catalog
        reason: String,
    },

    /// Two dependencies share the same identifier
    #[error("Duplicate dependency id '{id}' in groups '{first_group}' and '{second_group}'")]
    DuplicateDependency {
        /// The duplicated identifier
        id: String,
        /// Group holding the first occurrence
        first_group: String,
        /// Group holding the second occurrence
        second_group: String,
    },

    /// A requested dependency is not part of the catalog
    #[error("Unknown dependency '{id}'")]
    UnknownDependency {
        /// The requested identifier
        id: String,
        /// Close catalog identifiers, best match first
        suggestions: Vec<String>,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error wrapper carrying a suggestion and extra details for the terminal
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: HelpError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: HelpError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach additional details about the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with contextual suggestions.
///
/// Known [`HelpError`] variants and template failures anywhere in the chain
/// get tailored advice; everything else is wrapped as [`HelpError::Other`]
/// with the rest of the chain as details.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(help_error) = cause.downcast_ref::<HelpError>() {
            return create_error_context(help_error, &error);
        }
        if let Some(template_error) = cause.downcast_ref::<TemplateError>() {
            return ErrorContext::new(HelpError::Other {
                message: template_error.to_string(),
            })
            .with_details(template_error.details())
            .with_suggestion("Check the templates directory passed with --templates");
        }
    }

    let io_error = error.chain().find_map(|cause| cause.downcast_ref::<std::io::Error>());
    if let Some(io_error) = io_error {
        if io_error.kind() == std::io::ErrorKind::PermissionDenied {
            return ErrorContext::new(HelpError::Other {
                message: error.to_string(),
            })
            .with_suggestion("Check the permissions of the output directory");
        }
    }

    let details = error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>();
    let context = ErrorContext::new(HelpError::Other {
        message: error.to_string(),
    });
    if details.is_empty() {
        context
    } else {
        context.with_details(details.join("\n  → "))
    }
}

fn create_error_context(help_error: &HelpError, original: &anyhow::Error) -> ErrorContext {
    match help_error {
        HelpError::CatalogNotFound {
            path,
        } => ErrorContext::new(HelpError::CatalogNotFound {
            path: path.clone(),
        })
        .with_suggestion("Pass --catalog <file> or set INITIALIZR_HELP_CATALOG"),
        HelpError::UnknownDependency {
            id,
            suggestions,
        } => {
            let context = ErrorContext::new(HelpError::UnknownDependency {
                id: id.clone(),
                suggestions: suggestions.clone(),
            });
            if suggestions.is_empty() {
                context.with_suggestion("Run 'initializr-help list' to see the available dependencies")
            } else {
                context.with_suggestion(format!("Did you mean '{}'?", suggestions.join("', '")))
            }
        }
        HelpError::DuplicateDependency {
            id,
            ..
        } => ErrorContext::new(HelpError::Other {
            message: help_error.to_string(),
        })
        .with_suggestion(format!("Rename one of the '{id}' entries so that every id is unique")),
        other => {
            let message = other.to_string();
            let context = ErrorContext::new(HelpError::Other {
                message: message.clone(),
            });
            // keep the outer context messages, e.g. which file was being loaded
            let outer = original.to_string();
            if outer == message {
                context
            } else {
                context.with_details(outer)
            }
        }
    }
}
