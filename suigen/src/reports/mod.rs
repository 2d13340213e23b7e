//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, PackageSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use list::{FunctionListing, ListReport, ModuleListing, PackageListing};
pub use output::{Report, TerminalOutput};
