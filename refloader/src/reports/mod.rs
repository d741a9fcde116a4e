//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, GroupListing};
pub use generate::{GenerateReport, GenerationResult, PreviewFile};
pub use output::{Output, Report, TerminalOutput};

use refloader_core::{Diagnostic, Severity};

/// Warnings and errors go to stderr, info lines to stdout.
fn render_diagnostics(out: &mut dyn Output, diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        match diag.severity {
            Severity::Error | Severity::Warning => out.warning(&diag.to_string()),
            Severity::Info => out.preformatted(&diag.to_string()),
        }
    }
}
