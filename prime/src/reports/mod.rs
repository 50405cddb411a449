//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod clean;
mod generate;
mod output;

pub use check::{CheckReport, TaskSummary};
pub use clean::{CleanReport, CleanedDir};
pub use generate::{GenerateReport, PreviewEntry, TaskLine};
pub use output::{Report, TerminalOutput};
