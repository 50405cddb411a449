use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use primelib_codegen::FailurePolicy;
use primelib_config::PrimelibYaml;
use primelib_core::Verbosity;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to primelib.yaml
    #[arg(short, long, default_value = "primelib.yaml")]
    pub config: PathBuf,

    /// Only run the named generator (task name or output name), repeatable
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Keep running the remaining generators after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Show what would run and which files would be removed
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self, verbosity: Verbosity) -> Result<()> {
        let primelib_yaml = PrimelibYaml::open(&self.config).unwrap_or_exit();
        let policy = if self.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::FailFast
        };

        let report = ops::generate(
            &primelib_yaml,
            ops::generate::GenerateOptions {
                only: &self.only,
                policy,
                dry_run: self.dry_run,
                verbosity,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        report.into_result()
    }
}
