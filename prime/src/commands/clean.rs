use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use primelib_config::PrimelibYaml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to primelib.yaml
    #[arg(short, long, default_value = "primelib.yaml")]
    pub config: PathBuf,

    /// Only clean the named generator (task name or output name), repeatable
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let primelib_yaml = PrimelibYaml::open(&self.config).unwrap_or_exit();

        let report = ops::clean(
            &primelib_yaml,
            ops::clean::CleanOptions {
                only: &self.only,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
