//! Check command report data structures.

use std::path::PathBuf;

use refloader_core::Diagnostic;
use refloader_manifest::Group;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// Report data from manifest classification.
#[derive(Debug)]
pub struct CheckReport {
    pub manifest: PathBuf,
    /// One listing per group, in load order. Empty when the manifest is missing.
    pub groups: Vec<GroupListing>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The references of one group, as displayed.
#[derive(Debug)]
pub struct GroupListing {
    pub group: Group,
    pub entries: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);
        if self.groups.is_empty() {
            return;
        }

        out.key_value("Manifest", &self.manifest.display().to_string());
        for listing in &self.groups {
            out.newline();
            out.section(&format!("{} ({})", listing.group, listing.entries.len()));
            for (i, entry) in listing.entries.iter().enumerate() {
                match listing.group {
                    Group::Before | Group::After => out.numbered_item(i + 1, entry),
                    Group::Generated | Group::Unordered => out.list_item(entry),
                }
            }
        }
    }
}
