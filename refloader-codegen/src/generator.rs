//! Turns a compiled context into the two loader artifacts.

use std::path::PathBuf;

use eyre::Result;
use refloader_core::{FileSet, GeneratedFile};

use crate::{
    ast::LoadChain,
    files::{FlatManifestJs, LoaderJs, flat_manifest_path},
    pipeline::CompilationContext,
};

/// A generated file that would be written, for `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Result of writing the artifacts.
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Paths written, flat manifest first.
    pub written: Vec<PathBuf>,
}

/// Generates the nested loader and the flat manifest for one manifest.
#[derive(Debug)]
pub struct Generator {
    loader: LoaderJs,
    flat_manifest: FlatManifestJs,
}

impl Generator {
    /// Build a generator from a finished pipeline run.
    ///
    /// Returns `None` when the rewrite phase was skipped because no output
    /// directory was configured.
    pub fn from_context(ctx: CompilationContext) -> Option<Self> {
        let modules = ctx.modules?;

        let chain = LoadChain::new()
            .each(modules.before.iter().cloned())
            .batch(modules.generated.iter().cloned())
            .batch(modules.unordered.iter().cloned())
            .each(modules.after.iter().cloned());

        let loader = ctx.options.loader;
        Some(Self {
            flat_manifest: FlatManifestJs::new(flat_manifest_path(&loader), modules.all()),
            loader: LoaderJs::new(loader, chain),
        })
    }

    pub fn loader_js(&self) -> &LoaderJs {
        &self.loader
    }

    pub fn flat_manifest_js(&self) -> &FlatManifestJs {
        &self.flat_manifest
    }

    /// Render both artifacts without writing them.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.file_set()
            .files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path().to_path_buf(),
                content: file.content().to_string(),
            })
            .collect()
    }

    /// Write both artifacts. Either both are replaced or neither is.
    pub fn generate(&self) -> Result<GenerateResult> {
        let written = self.file_set().commit()?;
        Ok(GenerateResult { written })
    }

    fn file_set(&self) -> FileSet {
        let mut files = FileSet::new();
        files.add(&self.flat_manifest).add(&self.loader);
        files
    }
}

#[cfg(test)]
mod tests {
    use refloader_manifest::{Group, References};

    use super::*;
    use crate::pipeline::GenerateOptions;

    fn context(modules: Option<References<String>>) -> CompilationContext {
        let mut ctx = CompilationContext::new(
            References::default(),
            GenerateOptions {
                out_dir: Some(PathBuf::from("/out")),
                loader: PathBuf::from("/out/loader.js"),
            },
        );
        ctx.modules = modules;
        ctx
    }

    #[test]
    fn test_no_modules_no_generator() {
        assert!(Generator::from_context(context(None)).is_none());
    }

    #[test]
    fn test_chain_follows_group_order() {
        let mut modules = References::default();
        modules.push(Group::After, "./d".to_string());
        modules.push(Group::Before, "./a".to_string());
        modules.push(Group::Unordered, "./c".to_string());
        modules.push(Group::Generated, "./b".to_string());

        let generator = Generator::from_context(context(Some(modules))).unwrap();
        let order: Vec<&str> = generator.loader_js().chain().modules().collect();
        assert_eq!(order, vec!["./a", "./b", "./c", "./d"]);
        assert_eq!(generator.flat_manifest_js().modules(), ["./a", "./b", "./c", "./d"]);
    }

    #[test]
    fn test_preview_lists_flat_manifest_first() {
        let generator = Generator::from_context(context(Some(References::default()))).unwrap();
        let preview = generator.preview();

        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].path, PathBuf::from("/out/loader.bin.js"));
        assert_eq!(preview[0].content, "define([], function () {});\n");
        assert_eq!(preview[1].path, PathBuf::from("/out/loader.js"));
        assert_eq!(preview[1].content, "define(function (require) {\n});\n");
    }
}
