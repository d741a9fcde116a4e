//! Generate command report data structures.

use std::path::PathBuf;

use refloader_core::Diagnostic;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// Report data from loader generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub manifest: PathBuf,
    /// Parser and pipeline diagnostics, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
    pub result: GenerationResult,
}

/// Result of loader generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Nothing was generated. The reason is among the info diagnostics.
    Skipped,
    /// Files were written to disk.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        match &self.result {
            GenerationResult::Skipped => {
                out.preformatted(&format!(
                    "Nothing generated from {}",
                    self.manifest.display()
                ));
            }
            GenerationResult::Written(files) => {
                out.section("Generated");
                for file in files {
                    out.added_item(&file.display().to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            manifest: PathBuf::from("/p/reference.ts"),
            diagnostics: vec![Diagnostic::warning("filter", "no loadable modules found")],
            result: GenerationResult::Written(vec![PathBuf::from("/p/loader.js")]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: no loadable modules found",
                "Generated:",
                "  + /p/loader.js",
            ]
        );
    }

    #[test]
    fn test_render_skipped() {
        let report = GenerateReport {
            manifest: PathBuf::from("/p/reference.ts"),
            diagnostics: vec![Diagnostic::info("rewrite", "no output directory configured")],
            result: GenerationResult::Skipped,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "info: no output directory configured",
                "Nothing generated from /p/reference.ts",
            ]
        );
    }
}
