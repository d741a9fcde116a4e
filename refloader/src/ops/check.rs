//! Check operation - manifest classification.

use refloader_core::Diagnostic;
use refloader_manifest::{Group, ParsedManifest};

use super::Inputs;
use crate::reports::{CheckReport, GroupListing};

/// Execute the check operation.
///
/// Lists every reference by group, relative to the manifest directory.
/// With `strict`, manifest warnings become errors and fail the check.
pub fn check(inputs: &Inputs, parsed: Option<ParsedManifest>, strict: bool) -> CheckReport {
    let Some(parsed) = parsed else {
        return CheckReport {
            manifest: inputs.manifest.clone(),
            groups: Vec::new(),
            diagnostics: vec![Diagnostic::info(
                "check",
                format!("manifest '{}' not found", inputs.manifest.display()),
            )],
        };
    };

    let base = inputs.base();
    let groups = Group::ALL
        .into_iter()
        .map(|group| GroupListing {
            group,
            entries: parsed
                .references
                .group(group)
                .iter()
                .map(|p| p.strip_prefix(base).unwrap_or(p).display().to_string())
                .collect(),
        })
        .collect();

    let diagnostics = if strict {
        parsed.diagnostics.into_iter().map(Diagnostic::escalate).collect()
    } else {
        parsed.diagnostics
    };

    CheckReport {
        manifest: inputs.manifest.clone(),
        groups,
        diagnostics,
    }
}
