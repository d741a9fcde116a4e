//! Pipeline orchestrator.

use eyre::{Result, WrapErr};
use refloader_manifest::References;

use super::{
    CompilationContext, GenerateOptions, Phase,
    phases::{FilterPhase, RewritePhase},
};

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (filter, rewrite) followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .phase(MyCustomPhase)
///     .run(references, options)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run every phase over `references`.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(
        &self,
        references: References,
        options: GenerateOptions,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(references, options);

        let builtin_phases: Vec<Box<dyn Phase>> =
            vec![Box::new(FilterPhase), Box::new(RewritePhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            log::debug!("running phase {}: {}", phase.name(), phase.description());
            phase
                .run(&mut ctx)
                .wrap_err_with(|| format!("{} phase failed", phase.name()))?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
