//! Lifecycle error taxonomy.
//!
//! Every variant is run-terminating: nothing is recovered locally, and a
//! failure on iteration k leaves iterations 1..k-1 permanently applied.
//! Only the binary boundary decides process exit behavior.

use thiserror::Error;

use dockhand_cluster::ClusterError;

/// Result type alias for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Errors that abort a lifecycle run.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A backing-service call failed (network/auth/throttling).
    #[error("cluster service error: {0}")]
    Cluster(#[from] ClusterError),

    /// A creation would push membership above the configured ceiling.
    #[error("cannot create instance: cluster has {members} members, ceiling is {ceiling}")]
    CeilingExceeded { members: usize, ceiling: u32 },

    /// Deletion requested but nothing matches the naming + status filter.
    #[error("no eligible instance: nothing matching prefix {prefix:?} is in the ready state")]
    NoEligibleCandidate { prefix: String },

    /// More deletions requested than undeleted eligible candidates remain.
    #[error("deletion {wanted} requested but only {remaining} eligible candidate(s) remain")]
    PositionOutOfRange { wanted: u32, remaining: usize },
}
