//! Error types for cluster backends.

use thiserror::Error;

/// Result type alias for cluster API operations.
pub type ClusterResult<T> = Result<T, ClusterError>;

/// Errors that can occur talking to the backing cluster service.
///
/// Every variant is fatal to the run: the controller never retries.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("cluster API call failed: {0}")]
    Api(String),

    #[error("instance {id}: {reason}")]
    Instance { id: String, reason: String },
}

impl ClusterError {
    pub fn instance(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Instance {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
