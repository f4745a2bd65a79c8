use thiserror::Error;

/// Failure of a reporting collaborator
///
/// Reporting is observational only: these errors are surfaced to the caller
/// but never abort a run or alter its PnL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Report sink closed")]
    Closed,

    #[error("Report sink full, event dropped")]
    Dropped,

    #[error("Report write failed: {0}")]
    Io(String),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
