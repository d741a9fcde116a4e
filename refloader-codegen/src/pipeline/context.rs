//! Compilation context passed through pipeline phases.

use std::path::PathBuf;

use refloader_manifest::References;

use super::Diagnostic;

/// Where the generated artifacts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Root of the compiled output tree. Without it nothing is generated.
    pub out_dir: Option<PathBuf>,
    /// Absolute path of the nested loader script.
    pub loader: PathBuf,
}

/// Context passed through all pipeline phases.
///
/// Carries the references being compiled, the module ids once the rewrite
/// phase has produced them, and every diagnostic collected along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// Absolute source paths, filtered in place by the filter phase.
    pub references: References,
    pub options: GenerateOptions,
    /// Module ids relative to the loader (populated by RewritePhase).
    pub modules: Option<References<String>>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(references: References, options: GenerateOptions) -> Self {
        Self {
            references,
            options,
            modules: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }
}
