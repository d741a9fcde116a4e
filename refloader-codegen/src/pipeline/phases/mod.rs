//! Built-in pipeline phases.
//!
//! - [`FilterPhase`] - drops declaration files
//! - [`RewritePhase`] - maps source paths onto module ids

mod filter;
mod rewrite;

pub use filter::{FilterPhase, is_declaration_file};
pub use rewrite::{RewriteError, RewritePhase, rewrite};
