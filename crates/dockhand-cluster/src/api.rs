//! The cluster API seam.
//!
//! Four calls, nothing else: read membership, read one instance, create one
//! instance, delete one instance. Mutations complete asynchronously on the
//! service side; the calls return once the request is accepted.

use async_trait::async_trait;

use dockhand_core::{ClusterView, InstanceId, InstanceInfo};

use crate::error::ClusterResult;

/// Everything the backing service needs to provision one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    /// Cluster the new instance will belong to.
    pub cluster_id: String,
    /// Identifier for the new instance.
    pub instance_id: InstanceId,
    /// Instance class (e.g. "db.t3.medium").
    pub instance_class: String,
    /// Database engine the instance runs.
    pub engine: String,
    /// Tags attached at creation, for later discoverability.
    pub tags: Vec<(String, String)>,
}

/// Narrow interface to the backing cluster service.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    /// Read current membership for a cluster.
    ///
    /// Zero matching clusters is not an error; it yields an empty view.
    async fn get_cluster(&self, cluster_id: &str) -> ClusterResult<ClusterView>;

    /// Read status and creation time for one instance.
    async fn instance_info(&self, instance_id: &str) -> ClusterResult<InstanceInfo>;

    /// Provision one instance. Returns the created identifier.
    ///
    /// The instance enters a transient non-ready status; readiness happens
    /// out of band and callers must not wait for it.
    async fn create_instance(&self, req: CreateRequest) -> ClusterResult<InstanceId>;

    /// Tear down one instance. Returns the deleted identifier.
    ///
    /// Irreversible once accepted; the service offers no completion signal
    /// and no idempotency guarantee.
    async fn delete_instance(&self, instance_id: &str) -> ClusterResult<InstanceId>;
}
