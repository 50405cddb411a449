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
pub struct CheckCommand {
    /// Path to primelib.yaml
    #[arg(short, long, default_value = "primelib.yaml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let primelib_yaml = PrimelibYaml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&primelib_yaml)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
