use clap::Args;
use eyre::Result;
use refloader_manifest::Config;

use super::{SourceArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Treat region marker warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let inputs = self.source.load(Config::default())?;
        let parsed = ops::read_manifest(&inputs).unwrap_or_exit();

        let report = ops::check(&inputs, parsed, self.strict);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
