//! Domain types shared between the controller and cluster backends.
//!
//! Instance status is an open-ended string set owned by the backing
//! service; only `READY_STATUS` is recognized as a terminal/ready state.
//! Any other value, including ones that don't exist yet, means "not yet
//! eligible".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier of a managed cluster.
pub type ClusterId = String;

/// Unique identifier of an instance attached to a cluster.
pub type InstanceId = String;

/// The one status value that makes an instance eligible for teardown.
pub const READY_STATUS: &str = "available";

/// A point-in-time view of a cluster's membership, as reported by the
/// backing service. Member order is the API-reported order and carries
/// no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterView {
    /// Member instance identifiers, API order.
    pub members: Vec<InstanceId>,
}

impl ClusterView {
    /// An empty view — what an unknown or member-less cluster reports.
    pub fn empty() -> Self {
        Self { members: Vec::new() }
    }

    /// Current member count. Always equals `members.len()`.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Per-instance details from the backing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub id: InstanceId,
    /// Service-reported status string ("available", "creating", ...).
    pub status: String,
    /// Service-assigned creation time. Absent while the instance is
    /// still being provisioned.
    pub created_at: Option<DateTime<Utc>>,
}

impl InstanceInfo {
    /// Whether this instance is in the recognized ready state.
    pub fn is_ready(&self) -> bool {
        self.status == READY_STATUS
    }
}
