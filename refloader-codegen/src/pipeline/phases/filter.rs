//! Filter phase - drops declaration files.

use std::path::Path;

use eyre::Result;

use crate::pipeline::{CompilationContext, Phase};

/// Whether `path` is a TypeScript declaration file (`*.d.ts`).
///
/// Declaration files produce no JavaScript, so there is nothing to load.
pub fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(".d.ts"))
}

/// Phase that removes `.d.ts` files from every group.
pub struct FilterPhase;

impl Phase for FilterPhase {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn description(&self) -> &'static str {
        "Drop declaration files"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let before = ctx.references.len();
        ctx.references.retain(|path| !is_declaration_file(path));
        log::debug!(
            "dropped {} declaration file(s)",
            before - ctx.references.len()
        );

        if ctx.references.is_empty() {
            ctx.add_warning(self.name(), "no loadable modules found in the manifest");
        }
        Ok(())
    }
}
