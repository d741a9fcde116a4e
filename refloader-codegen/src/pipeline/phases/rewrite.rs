//! Rewrite phase - maps source paths onto module ids.

use std::path::{Path, PathBuf};

use eyre::Result;
use refloader_core::path;
use refloader_manifest::References;
use thiserror::Error;

use crate::pipeline::{CompilationContext, Phase};

const SOURCE_EXTENSION: &str = "ts";

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("'{}' does not have a .ts extension", path.display())]
    MissingSourceExtension { path: PathBuf },

    #[error("failed to resolve '{}' against the working directory", path.display())]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Map every source path onto a module id for the compiled output tree.
///
/// The directory shared by all references is swapped for `out_dir`, the
/// `.ts` extension is dropped, and the result is expressed relative to the
/// directory holding `loader`. Relative `out_dir` and `loader` paths resolve
/// against the working directory.
pub fn rewrite(
    references: &References,
    out_dir: &Path,
    loader: &Path,
) -> Result<References<String>, RewriteError> {
    let common = path::common_dir(references.iter().map(PathBuf::as_path)).unwrap_or_default();
    let out_dir = absolute(out_dir)?;
    let loader_dir = match loader.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => absolute(parent)?,
        _ => absolute(Path::new("."))?,
    };
    log::debug!(
        "rewriting {} module(s) from {} to {}",
        references.len(),
        common.display(),
        out_dir.display()
    );

    references.clone().try_map(|source| {
        let relative: PathBuf = source
            .components()
            .skip(common.components().count())
            .collect();

        if relative.extension().is_none_or(|ext| ext != SOURCE_EXTENSION) {
            return Err(RewriteError::MissingSourceExtension { path: source });
        }
        let compiled = out_dir.join(relative).with_extension("");

        let module = path::to_module_id(&path::relative_to(&compiled, &loader_dir));
        log::trace!("{} -> {}", source.display(), module);
        Ok(module)
    })
}

fn absolute(path: &Path) -> Result<PathBuf, RewriteError> {
    std::path::absolute(path)
        .map(|p| path::normalize(&p))
        .map_err(|source| RewriteError::Unresolvable {
            path: path.to_path_buf(),
            source,
        })
}

/// Phase that runs [`rewrite`] when an output directory is configured.
///
/// Without one it records an info diagnostic and leaves
/// [`CompilationContext::modules`] empty, so nothing gets generated.
pub struct RewritePhase;

impl Phase for RewritePhase {
    fn name(&self) -> &'static str {
        "rewrite"
    }

    fn description(&self) -> &'static str {
        "Map source paths onto module ids"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(out_dir) = &ctx.options.out_dir else {
            ctx.add_info(
                self.name(),
                "no output directory configured, skipping loader generation",
            );
            return Ok(());
        };

        ctx.modules = Some(rewrite(&ctx.references, out_dir, &ctx.options.loader)?);
        Ok(())
    }
}
