//! `refloader.toml` configuration.

use std::path::{Path, PathBuf};

use refloader_core::path;
use serde::Deserialize;

use crate::{Error, Markers, Result, SourceContext};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "refloader.toml";

/// Settings for one loader generation run.
///
/// Every field is optional in the file; the CLI fills gaps from its flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The reference manifest to read.
    pub manifest: Option<PathBuf>,

    /// Where to write the nested loader script.
    pub loader: Option<PathBuf>,

    /// Root of the compiled output tree. Generation is skipped without it.
    pub out_dir: Option<PathBuf>,

    /// Build-generated source files.
    #[serde(default)]
    pub generated: Vec<PathBuf>,

    /// Region markers.
    #[serde(default)]
    pub markers: Markers,
}

impl Config {
    /// Load a config file. Relative paths inside it resolve against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_str_with_filename(&content, &path.display().to_string())?;
        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Parse config content with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.config_error(e))?;

        if config.markers.start.is_empty() || config.markers.end.is_empty() {
            return Err(ctx.validation_error("region markers must not be empty"));
        }
        let Markers { start, end } = &config.markers;
        if start.contains(end.as_str()) || end.contains(start.as_str()) {
            return Err(ctx.validation_error(
                "region start and end markers must not contain one another",
            ));
        }

        Ok(config)
    }

    /// Layer `flags` on top of this config.
    ///
    /// Set paths in `flags` win, and a non-empty `generated` list replaces
    /// the file's list. Markers always come from `self`.
    pub fn merge(self, flags: Config) -> Self {
        Self {
            manifest: flags.manifest.or(self.manifest),
            loader: flags.loader.or(self.loader),
            out_dir: flags.out_dir.or(self.out_dir),
            generated: if flags.generated.is_empty() {
                self.generated
            } else {
                flags.generated
            },
            markers: self.markers,
        }
    }

    /// Resolve every relative path in the config against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| path::resolve(base, &p);
        self.manifest = self.manifest.map(resolve);
        self.loader = self.loader.map(resolve);
        self.out_dir = self.out_dir.map(resolve);
        self.generated = self.generated.into_iter().map(resolve).collect();
        self
    }
}
