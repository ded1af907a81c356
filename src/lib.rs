//! Job fit analyzer library
//!
//! Compares resume text with a job description: vocabulary skill matching,
//! percentage score, experience tier, key strengths and learning links for
//! the missing skills.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{JobFitError, Result};
pub use processing::{AnalysisEngine, AnalysisResult};
