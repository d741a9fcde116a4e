//! Reference manifest parsing from files and strings.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use refloader_core::{Diagnostic, path};
use regex::Regex;

use crate::{
    Error, GeneratedSet, Group, Markers, REFERENCE_PREFIX, References, Region, Result,
    SourceContext,
};

static REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"/// <reference path="([^"]+)""#).unwrap());

const STAGE: &str = "parse";

/// The result of parsing a reference manifest.
#[derive(Debug, Clone)]
pub struct ParsedManifest {
    /// Absolute paths, classified into load groups.
    pub references: References,
    /// Non-fatal problems found while scanning, such as misplaced markers.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scans a reference manifest and classifies its references.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use refloader_manifest::{GeneratedSet, ReferenceParser};
///
/// let content = r#"
/// /// <reference path="a.ts" />
/// //grunt-start
/// /// <reference path="b.ts" />
/// //grunt-end
/// /// <reference path="c.ts" />
/// "#;
///
/// let parsed = ReferenceParser::new("/p")
///     .generated(GeneratedSet::new(["/p/b.ts"]))
///     .parse_str(content, "reference.ts")
///     .unwrap();
///
/// assert_eq!(parsed.references.before, [Path::new("/p/a.ts")]);
/// assert_eq!(parsed.references.generated, [Path::new("/p/b.ts")]);
/// assert!(parsed.references.unordered.is_empty());
/// assert_eq!(parsed.references.after, [Path::new("/p/c.ts")]);
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceParser {
    base: PathBuf,
    generated: GeneratedSet,
    markers: Markers,
}

impl ReferenceParser {
    /// Create a parser that resolves references against `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            generated: GeneratedSet::default(),
            markers: Markers::default(),
        }
    }

    /// Set the generated files that get split out of the unordered region.
    pub fn generated(mut self, generated: GeneratedSet) -> Self {
        self.generated = generated;
        self
    }

    /// Use custom region markers.
    pub fn markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Parse a manifest file.
    pub fn parse_file(&self, manifest: impl AsRef<Path>) -> Result<ParsedManifest> {
        let manifest = manifest.as_ref();
        let content = std::fs::read_to_string(manifest).map_err(|e| Error::io(manifest, e))?;
        self.parse_str(&content, &manifest.display().to_string())
    }

    /// Parse manifest content, using `filename` for error reporting.
    pub fn parse_str(&self, content: &str, filename: &str) -> Result<ParsedManifest> {
        let ctx = SourceContext::new(content, filename);
        let mut region = Region::default();
        let mut references = References::default();
        let mut diagnostics = Vec::new();
        let mut offset = 0;

        for (index, raw) in content.split('\n').enumerate() {
            let line_no = index + 1;
            let line_start = offset;
            offset += raw.len() + 1;
            let line = raw.trim();

            if line.contains(self.markers.start.as_str()) {
                let (next, issue) = region.on_start();
                region = next;
                if let Some(issue) = issue {
                    diagnostics.push(
                        Diagnostic::warning(STAGE, issue.to_string()).at(ctx.location(line_no)),
                    );
                }
            }
            if line.contains(self.markers.end.as_str()) {
                let (next, issue) = region.on_end();
                region = next;
                if let Some(issue) = issue {
                    diagnostics.push(
                        Diagnostic::warning(STAGE, issue.to_string()).at(ctx.location(line_no)),
                    );
                }
            }

            if !line.contains(REFERENCE_PREFIX) {
                continue;
            }

            let relative = REFERENCE_PATTERN
                .captures(line)
                .and_then(|c| c.get(1))
                .ok_or_else(|| {
                    ctx.malformed_reference(line_no, (line_start, raw.trim_end().len()))
                })?
                .as_str();

            let resolved = path::resolve(&self.base, Path::new(relative));
            let group = match region {
                Region::Before => Group::Before,
                Region::Unordered if self.generated.contains(&resolved) => Group::Generated,
                Region::Unordered => Group::Unordered,
                Region::After => Group::After,
            };
            log::trace!("{}: {} -> {}", ctx.location(line_no), relative, group);
            references.push(group, resolved);
        }

        log::debug!(
            "parsed {}: {} before, {} generated, {} unordered, {} after",
            filename,
            references.before.len(),
            references.generated.len(),
            references.unordered.len(),
            references.after.len()
        );

        Ok(ParsedManifest {
            references,
            diagnostics,
        })
    }
}

/// Parse `manifest`, resolving references against `base` with the default markers.
pub fn parse(
    manifest: impl AsRef<Path>,
    base: impl Into<PathBuf>,
    generated: GeneratedSet,
) -> Result<ParsedManifest> {
    ReferenceParser::new(base)
        .generated(generated)
        .parse_file(manifest)
}

/// Parse manifest content with the default markers.
pub fn parse_str(
    content: &str,
    base: impl Into<PathBuf>,
    generated: GeneratedSet,
) -> Result<ParsedManifest> {
    ReferenceParser::new(base)
        .generated(generated)
        .parse_str(content, "reference.ts")
}
