//! Generated artifacts.
//!
//! - [`LoaderJs`] - the nested loader script
//! - [`FlatManifestJs`] - the flat `define([...])` dependency list

mod flat_manifest_js;
mod loader_js;

pub use flat_manifest_js::{FlatManifestJs, flat_manifest_path};
pub use loader_js::LoaderJs;
