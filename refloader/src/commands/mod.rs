mod check;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use generate::GenerateCommand;
use refloader_manifest::Config;

use crate::ops;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for refloader_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "refloader")]
#[command(version)]
#[command(about = "Generate ordered AMD loaders from reference manifests")]
pub(crate) struct Cli {
    /// Show debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn init_logging(&self) {
        let default = if self.verbose { "debug" } else { "warn" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
            .format_timestamp(None)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the loader script and flat manifest
    Generate(GenerateCommand),

    /// Parse the manifest and show how references are classified
    Check(CheckCommand),
}

/// Options shared by every command that reads a manifest.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to refloader.toml (defaults to ./refloader.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reference manifest to read
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Build-generated source file (repeatable)
    #[arg(short, long = "generated", value_name = "PATH")]
    pub generated: Vec<PathBuf>,
}

impl SourceArgs {
    /// Load the config and layer `flags` plus this command's own flags on top.
    fn load(&self, flags: Config) -> Result<ops::Inputs> {
        let cwd = std::env::current_dir().wrap_err("Failed to read the current directory")?;
        let flags = Config {
            manifest: self.manifest.clone(),
            generated: self.generated.clone(),
            ..flags
        };
        let config = ops::load_config(self.config.as_deref(), &cwd, flags).unwrap_or_exit();
        ops::Inputs::from_config(config)
    }
}
