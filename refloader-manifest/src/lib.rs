//! Reference manifest parsing for refloader.
//!
//! A reference manifest lists module paths in three regions:
//!
//! ```text
//! /// <reference path="polyfills.ts" />
//! //grunt-start
//! /// <reference path="app/models.ts" />
//! /// <reference path="app/views.ts" />
//! //grunt-end
//! /// <reference path="bootstrap.ts" />
//! ```
//!
//! Everything above the region start must load first, in order. Everything
//! below the region end loads last, in order. The region in between loads in
//! any order, except that files known to be build-generated are split out so
//! they can load as their own batch.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod generated;
mod parse;
mod references;
mod region;

pub use config::{CONFIG_FILE, Config};
pub use error::{Error, Result, SourceContext};
pub use generated::GeneratedSet;
pub use parse::{ParsedManifest, ReferenceParser, parse, parse_str};
pub use references::{Group, References};
pub use region::{MarkerIssue, Markers, REFERENCE_PREFIX, Region};
