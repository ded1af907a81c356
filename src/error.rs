//! Error handling for the job fit analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobFitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobFitError>;

/// Template rendering failures surface as output formatting errors
impl From<askama::Error> for JobFitError {
    fn from(err: askama::Error) -> Self {
        JobFitError::OutputFormatting(err.to_string())
    }
}

/// A blocking analysis task that panicked or was cancelled
impl From<tokio::task::JoinError> for JobFitError {
    fn from(err: tokio::task::JoinError) -> Self {
        JobFitError::AnalysisFailed(err.to_string())
    }
}
