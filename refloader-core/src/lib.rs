//! Core utilities and types for refloader.
//!
//! This crate provides the pieces shared by the manifest parser, the code
//! generator and the CLI: structured diagnostics, lexical path helpers and
//! generated-file writing.

mod diagnostic;
mod file;
pub mod path;

// Diagnostics
pub use diagnostic::{Diagnostic, Severity};
// File operations
pub use file::{File, FileSet, GeneratedFile};
