use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use refloader_manifest::Config;

use super::{SourceArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Where to write the loader script (defaults to loader.js next to the manifest)
    #[arg(short, long)]
    pub loader: Option<PathBuf>,

    /// Root of the compiled JavaScript tree; nothing is generated without it
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let inputs = self.source.load(Config {
            loader: self.loader.clone(),
            out_dir: self.out_dir.clone(),
            ..Default::default()
        })?;
        let parsed = ops::read_manifest(&inputs).unwrap_or_exit();

        let report = ops::generate(&inputs, parsed, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
