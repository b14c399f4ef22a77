//! Error types for the queue profiler.
//!
//! Collaborators report failures as a boxed error; the sampler wraps each one
//! in a [`SamplerError`] that names the step that failed and keeps the
//! original cause reachable through [`std::error::Error::source`].

use thiserror::Error;

/// Error type returned by every collaborator capability.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for sampler operations.
pub type Result<T> = std::result::Result<T, SamplerError>;

/// A failure that ended a sampling run.
#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("depth source unavailable for queue '{queue}' on iteration {iteration}: {source}")]
    SourceUnavailable {
        queue: String,
        iteration: u32,
        #[source]
        source: BoxError,
    },

    #[error("failed to persist depth sample for queue '{queue}' on iteration {iteration}: {source}")]
    PersistenceFailure {
        queue: String,
        iteration: u32,
        #[source]
        source: BoxError,
    },

    #[error("delay failed for queue '{queue}' after iteration {iteration}: {source}")]
    DelayFailure {
        queue: String,
        iteration: u32,
        #[source]
        source: BoxError,
    },
}

impl SamplerError {
    /// 0-based index of the iteration that failed.
    pub fn iteration(&self) -> u32 {
        match self {
            Self::SourceUnavailable { iteration, .. }
            | Self::PersistenceFailure { iteration, .. }
            | Self::DelayFailure { iteration, .. } => *iteration,
        }
    }

    /// Queue the failing run was bound to.
    pub fn queue(&self) -> &str {
        match self {
            Self::SourceUnavailable { queue, .. }
            | Self::PersistenceFailure { queue, .. }
            | Self::DelayFailure { queue, .. } => queue,
        }
    }
}
