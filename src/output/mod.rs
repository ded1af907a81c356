//! Report building and output formatting

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{MatchVerdict, Report, ReportMetadata, VerdictTier};
