//! Core types shared across initializr-help
//!
//! - [`HelpError`] - Enumerated error types for catalog, request and rendering failures
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format

pub mod error;

pub use error::{ErrorContext, HelpError, user_friendly_error};
