//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod output;
mod plan;
mod project;

pub use generate::{GenerateReport, GenerationResult};
pub use output::{Output, Report, TerminalOutput};
pub use plan::PlanReport;
pub use project::ProjectReport;
