//! The generation pipeline.
//!
//! A [`Pipeline`] takes the classified references of one manifest and runs
//! them through a fixed sequence of phases, sharing a [`CompilationContext`]:
//!
//! - `filter` drops declaration files and warns when nothing is left
//! - `rewrite` maps source paths onto module ids under the output directory
//!
//! Phases report non-fatal problems as [`Diagnostic`]s on the context and
//! only return an error when generation cannot continue.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use refloader_codegen::pipeline::{GenerateOptions, Pipeline};
//! use refloader_manifest::{GeneratedSet, parse_str};
//!
//! let parsed = parse_str(
//!     "/// <reference path=\"app.ts\" />\n",
//!     "/project/src",
//!     GeneratedSet::default(),
//! )
//! .unwrap();
//!
//! let ctx = Pipeline::new()
//!     .run(
//!         parsed.references,
//!         GenerateOptions {
//!             out_dir: Some(PathBuf::from("/project/build/js")),
//!             loader: PathBuf::from("/project/build/loader.js"),
//!         },
//!     )
//!     .unwrap();
//!
//! let modules = ctx.modules.unwrap();
//! assert_eq!(modules.before, ["./js/app"]);
//! ```

mod context;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, GenerateOptions};
pub use phase::Phase;
pub use refloader_core::{Diagnostic, Severity};
pub use runner::Pipeline;
