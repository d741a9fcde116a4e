//! Region markers and the classification state they drive.

use std::fmt;

use serde::Deserialize;

/// Literal that introduces a reference line.
pub const REFERENCE_PREFIX: &str = "/// <reference path=\"";

const DEFAULT_START: &str = "//grunt-start";
const DEFAULT_END: &str = "//grunt-end";

/// The substrings that open and close the unordered region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
        }
    }
}

/// Which part of the manifest the scanner is in.
///
/// Only moves forward: `Before` → `Unordered` → `After`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Region {
    #[default]
    Before,
    Unordered,
    After,
}

/// A region marker that showed up where it does not belong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIssue {
    /// A second region start inside the unordered region. Ignored.
    DuplicateStart,
    /// A region start after the region already ended. Ignored.
    StartAfterEnd,
    /// A region end with no region start before it. Jumps to `After`.
    EndWithoutStart,
    /// A second region end. Ignored.
    DuplicateEnd,
}

impl fmt::Display for MarkerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MarkerIssue::DuplicateStart => "duplicate region start marker ignored",
            MarkerIssue::StartAfterEnd => "region start marker after region end ignored",
            MarkerIssue::EndWithoutStart => {
                "region end marker without a region start; remaining references load after"
            }
            MarkerIssue::DuplicateEnd => "duplicate region end marker ignored",
        };
        f.write_str(msg)
    }
}

impl Region {
    /// Transition on a region start marker.
    pub fn on_start(self) -> (Region, Option<MarkerIssue>) {
        match self {
            Region::Before => (Region::Unordered, None),
            Region::Unordered => (Region::Unordered, Some(MarkerIssue::DuplicateStart)),
            Region::After => (Region::After, Some(MarkerIssue::StartAfterEnd)),
        }
    }

    /// Transition on a region end marker.
    pub fn on_end(self) -> (Region, Option<MarkerIssue>) {
        match self {
            Region::Before => (Region::After, Some(MarkerIssue::EndWithoutStart)),
            Region::Unordered => (Region::After, None),
            Region::After => (Region::After, Some(MarkerIssue::DuplicateEnd)),
        }
    }
}
