//! AMD loader generation for refloader.
//!
//! Takes the classified references produced by `refloader-manifest` and
//! turns them into two artifacts:
//!
//! - a nested loader script, where every `before` and `after` module waits
//!   for the one ahead of it and the `generated` and `unordered` groups each
//!   load as a single batch;
//! - a flat `define([...])` listing every module, for tooling that does not
//!   care about order.
//!
//! # Usage
//!
//! ```ignore
//! use refloader_codegen::{Generator, pipeline::{GenerateOptions, Pipeline}};
//!
//! let ctx = Pipeline::new().run(parsed.references, GenerateOptions {
//!     out_dir: Some("/project/build/js".into()),
//!     loader: "/project/build/loader.js".into(),
//! })?;
//!
//! if let Some(generator) = Generator::from_context(ctx) {
//!     generator.generate()?;
//! }
//! ```

mod generator;

pub mod ast;
pub mod builder;
pub mod files;
pub mod pipeline;

pub use generator::{GenerateResult, Generator, PreviewFile};
