//! Generate operation - loader generation from a manifest.

use eyre::{Context, Result};
use refloader_codegen::{
    Generator,
    pipeline::{GenerateOptions, Pipeline},
};
use refloader_core::Diagnostic;
use refloader_manifest::ParsedManifest;

use super::Inputs;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Execute the generate operation.
///
/// A missing manifest (`parsed` is `None`) or a missing output directory is
/// reported as a skip, not an error.
pub fn generate(
    inputs: &Inputs,
    parsed: Option<ParsedManifest>,
    dry_run: bool,
) -> Result<GenerateReport> {
    let Some(parsed) = parsed else {
        return Ok(GenerateReport {
            manifest: inputs.manifest.clone(),
            diagnostics: vec![Diagnostic::info(
                "generate",
                format!(
                    "manifest '{}' not found, nothing to generate",
                    inputs.manifest.display()
                ),
            )],
            result: GenerationResult::Skipped,
        });
    };

    let mut diagnostics = parsed.diagnostics;
    let ctx = Pipeline::new()
        .run(
            parsed.references,
            GenerateOptions {
                out_dir: inputs.out_dir.clone(),
                loader: inputs.loader.clone(),
            },
        )
        .wrap_err("Pipeline failed")?;
    diagnostics.extend(ctx.diagnostics.iter().cloned());

    let result = match Generator::from_context(ctx) {
        None => GenerationResult::Skipped,
        Some(generator) if dry_run => GenerationResult::Preview(
            generator
                .preview()
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path.display().to_string(),
                    content: f.content,
                })
                .collect(),
        ),
        Some(generator) => {
            let written = generator
                .generate()
                .wrap_err("Failed to write loader files")?;
            GenerationResult::Written(written.written)
        }
    };

    Ok(GenerateReport {
        manifest: inputs.manifest.clone(),
        diagnostics,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use refloader_core::Severity;
    use refloader_manifest::Config;
    use tempfile::TempDir;

    use super::*;
    use crate::ops::read_manifest;

    const MANIFEST: &str = r#"/// <reference path="a.ts" />
//grunt-start
/// <reference path="b.ts" />
//grunt-end
/// <reference path="c.ts" />
"#;

    fn inputs(temp: &TempDir, out_dir: Option<&str>) -> Inputs {
        Inputs::from_config(Config {
            manifest: Some(temp.path().join("src/reference.ts")),
            loader: Some(temp.path().join("build/loader.js")),
            out_dir: out_dir.map(|d| temp.path().join(d)),
            ..Default::default()
        })
        .unwrap()
    }

    fn write_manifest(temp: &TempDir, content: &str) {
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/reference.ts"), content).unwrap();
    }

    fn run(inputs: &Inputs, dry_run: bool) -> GenerateReport {
        let parsed = read_manifest(inputs).unwrap();
        generate(inputs, parsed, dry_run).unwrap()
    }

    #[test]
    fn test_writes_both_files() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, MANIFEST);

        let report = run(&inputs(&temp, Some("build/js")), false);
        let GenerationResult::Written(written) = report.result else {
            panic!("expected files to be written");
        };
        assert_eq!(
            written,
            vec![
                temp.path().join("build/loader.bin.js"),
                temp.path().join("build/loader.js"),
            ]
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("build/loader.bin.js")).unwrap(),
            "define([\"./js/a\", \"./js/b\", \"./js/c\"], function () {});\n"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, MANIFEST);

        let report = run(&inputs(&temp, Some("build/js")), true);
        let GenerationResult::Preview(files) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 2);
        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn test_missing_manifest_is_skipped() {
        let temp = TempDir::new().unwrap();

        let report = run(&inputs(&temp, Some("build/js")), false);
        assert!(matches!(report.result, GenerationResult::Skipped));
        assert_eq!(report.diagnostics[0].severity, Severity::Info);
        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn test_missing_out_dir_is_skipped() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, MANIFEST);

        let report = run(&inputs(&temp, None), false);
        assert!(matches!(report.result, GenerationResult::Skipped));
        assert!(report.diagnostics.iter().any(|d| d.stage == "rewrite"));
        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn test_collects_parse_and_pipeline_warnings() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, "//grunt-end\n/// <reference path=\"x.d.ts\" />\n");

        let report = run(&inputs(&temp, Some("build/js")), false);
        let stages: Vec<&str> = report.diagnostics.iter().map(|d| d.stage.as_str()).collect();
        assert_eq!(stages, vec!["parse", "filter"]);
    }

    #[test]
    fn test_non_ts_reference_fails_without_writing() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, "/// <reference path=\"legacy.js\" />\n");

        let inputs = inputs(&temp, Some("build/js"));
        let parsed = read_manifest(&inputs).unwrap();
        assert!(generate(&inputs, parsed, false).is_err());
        assert!(!temp.path().join("build/loader.js").exists());
    }
}
