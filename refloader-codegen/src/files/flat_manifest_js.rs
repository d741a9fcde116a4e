//! The flat dependency list written next to the loader.

use std::path::{Path, PathBuf};

use refloader_core::GeneratedFile;

use crate::{ast::DefineDeps, builder::CodeBuilder};

/// Sibling of `loader`: same directory, `.js` suffix replaced by `.bin.js`.
///
/// A loader name without a `.js` suffix keeps its full name as the stem.
pub fn flat_manifest_path(loader: &Path) -> PathBuf {
    let name = loader
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".js").unwrap_or(&name);
    loader.with_file_name(format!("{}.bin.js", stem))
}

/// `loader.bin.js`: one `define` listing every module as an unordered dependency.
#[derive(Debug, Clone)]
pub struct FlatManifestJs {
    path: PathBuf,
    modules: Vec<String>,
}

impl FlatManifestJs {
    pub fn new(path: impl Into<PathBuf>, modules: Vec<String>) -> Self {
        Self {
            path: path.into(),
            modules,
        }
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }
}

impl GeneratedFile for FlatManifestJs {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(&DefineDeps::new(self.modules.iter().cloned()));
        builder.build()
    }
}
