//! Unit test suite for initializr-help
//!
//! Exercises the public library API the way an embedding generator would:
//! build a catalog, describe a project, customize and render a help document.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod help_generation_tests;
