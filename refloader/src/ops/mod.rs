//! Core operations.
//!
//! This module contains the business logic for refloader commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod inputs;

pub use check::check;
pub use generate::generate;
pub use inputs::{Inputs, load_config, read_manifest};
