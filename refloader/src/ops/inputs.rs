//! Resolving config files and flags into the inputs of one run.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use refloader_core::path;
use refloader_manifest::{
    CONFIG_FILE, Config, GeneratedSet, Markers, ParsedManifest, ReferenceParser,
};

/// Loader file name used when none is configured, placed next to the manifest.
pub const DEFAULT_LOADER: &str = "loader.js";

/// Absolute inputs for one run.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub manifest: PathBuf,
    pub loader: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub generated: Vec<PathBuf>,
    pub markers: Markers,
}

impl Inputs {
    /// Fill defaults into a merged config. Fails when no manifest is given.
    pub fn from_config(config: Config) -> Result<Self> {
        let manifest = config.manifest.ok_or_else(|| {
            eyre!(
                "No manifest given: pass --manifest or set `manifest` in {}",
                CONFIG_FILE
            )
        })?;
        let loader = config
            .loader
            .unwrap_or_else(|| manifest_dir(&manifest).join(DEFAULT_LOADER));

        Ok(Self {
            manifest,
            loader,
            out_dir: config.out_dir,
            generated: config.generated,
            markers: config.markers,
        })
    }

    /// Directory the manifest's references are relative to.
    pub fn base(&self) -> &Path {
        manifest_dir(&self.manifest)
    }
}

fn manifest_dir(manifest: &Path) -> &Path {
    manifest.parent().unwrap_or(Path::new(""))
}

/// Read the config file and layer `flags` on top.
///
/// An explicit `config` path must exist. Without one, `refloader.toml` in
/// `cwd` is used when present. Relative paths in `flags` resolve against
/// `cwd`.
pub fn load_config(
    config: Option<&Path>,
    cwd: &Path,
    flags: Config,
) -> refloader_manifest::Result<Config> {
    let file = match config {
        Some(explicit) => Config::from_file(path::resolve(cwd, explicit))?,
        None => {
            let default = cwd.join(CONFIG_FILE);
            if default.is_file() {
                Config::from_file(&default)?
            } else {
                log::debug!("no {} in {}, using flags only", CONFIG_FILE, cwd.display());
                Config::default()
            }
        }
    };

    Ok(file.merge(flags.relative_to(cwd)))
}

/// Parse the manifest, or `None` when it does not exist.
pub fn read_manifest(inputs: &Inputs) -> refloader_manifest::Result<Option<ParsedManifest>> {
    if !inputs.manifest.is_file() {
        log::debug!("manifest {} not found", inputs.manifest.display());
        return Ok(None);
    }

    ReferenceParser::new(inputs.base())
        .generated(GeneratedSet::new(inputs.generated.iter().cloned()))
        .markers(inputs.markers.clone())
        .parse_file(&inputs.manifest)
        .map(Some)
}
