use thiserror::Error;

use crate::results::ResultSet;

/// Error type for perfrun operations.
#[derive(Debug, Error)]
pub enum PerfRunError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(
        "workload failed on iteration {iteration} after {completed} completed runs: {message}"
    )]
    MeasuredCallableFailure {
        /// 1-based index of the iteration that failed.
        iteration: u32,
        completed: u32,
        /// Durations recorded before the failure.
        partial: ResultSet,
        message: String,
    },
    #[error("io error: {0}")]
    Io(String),
}

impl PerfRunError {
    pub fn invalid_configuration<T: Into<String>>(msg: T) -> Self {
        PerfRunError::InvalidConfiguration(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        PerfRunError::Io(msg.into())
    }

    pub fn callable_failure<T: Into<String>>(iteration: u32, partial: ResultSet, msg: T) -> Self {
        PerfRunError::MeasuredCallableFailure {
            iteration,
            completed: partial.len() as u32,
            partial,
            message: msg.into(),
        }
    }

    /// Durations recorded before a workload failure, if any.
    pub fn partial_results(&self) -> Option<&ResultSet> {
        match self {
            PerfRunError::MeasuredCallableFailure { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PerfRunError {
    fn from(err: std::io::Error) -> Self {
        PerfRunError::io(err.to_string())
    }
}
