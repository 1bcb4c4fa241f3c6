//! Scheduler error types

use thiserror::Error;
use uplokal_domain::UplokalError;

use crate::errors::InfraError;

/// Errors raised by background frame drivers
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Driver is already running
    #[error("Scheduler already running")]
    AlreadyRunning,

    /// Driver is not running
    #[error("Scheduler not running")]
    NotRunning,

    /// Frame interval must be non-zero
    #[error("Invalid frame interval: {0:?}")]
    InvalidInterval(std::time::Duration),

    /// Operation timed out
    #[error("Operation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Task join failed
    #[error("Task join failed: {0}")]
    TaskJoinFailed(String),
}

impl From<SchedulerError> for InfraError {
    fn from(err: SchedulerError) -> Self {
        let uplokal_err = match err {
            SchedulerError::AlreadyRunning
            | SchedulerError::NotRunning
            | SchedulerError::InvalidInterval(_) => UplokalError::InvalidInput(err.to_string()),
            SchedulerError::Timeout { .. } | SchedulerError::TaskJoinFailed(_) => {
                UplokalError::Internal(err.to_string())
            }
        };
        InfraError(uplokal_err)
    }
}

impl From<SchedulerError> for UplokalError {
    fn from(err: SchedulerError) -> Self {
        InfraError::from(err).into()
    }
}

/// Convenience type alias for scheduler operations
pub type SchedulerResult<T> = Result<T, SchedulerError>;
