//! Cluster inspector — fresh membership reads.

use std::sync::Arc;

use tracing::{debug, warn};

use dockhand_cluster::ClusterApi;
use dockhand_core::ClusterView;

use crate::error::LifecycleResult;

/// Reads current cluster membership. One backing-service query per call,
/// no caching — callers that need freshness call again.
pub struct ClusterInspector {
    api: Arc<dyn ClusterApi>,
}

impl ClusterInspector {
    pub fn new(api: Arc<dyn ClusterApi>) -> Self {
        Self { api }
    }

    /// Query membership for `cluster_id`.
    ///
    /// Zero matching clusters yields an empty view rather than an error;
    /// an empty cluster and a mistyped identifier look the same here, so
    /// the empty case is logged for the operator's benefit.
    pub async fn inspect(&self, cluster_id: &str) -> LifecycleResult<ClusterView> {
        let view = self.api.get_cluster(cluster_id).await?;
        if view.member_count() == 0 {
            warn!(%cluster_id, "cluster reported no members (empty or not found)");
        } else {
            debug!(%cluster_id, members = view.member_count(), "inspected cluster");
        }
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockhand_cluster::MemoryCluster;

    #[tokio::test]
    async fn inspect_reports_members_in_api_order() {
        let api = Arc::new(MemoryCluster::new());
        api.add_member("c1", "prod-1", "available");
        api.add_member("c1", "temp-instance-a", "creating");

        let inspector = ClusterInspector::new(api);
        let view = inspector.inspect("c1").await.unwrap();
        assert_eq!(view.member_count(), 2);
        assert_eq!(view.members, vec!["prod-1", "temp-instance-a"]);
    }

    #[tokio::test]
    async fn inspect_unknown_cluster_is_empty() {
        let api = Arc::new(MemoryCluster::new());
        let inspector = ClusterInspector::new(api);
        let view = inspector.inspect("missing").await.unwrap();
        assert_eq!(view.member_count(), 0);
    }

    #[tokio::test]
    async fn inspect_is_idempotent_without_mutation() {
        let api = Arc::new(MemoryCluster::new());
        api.add_member("c1", "a", "available");
        api.add_member("c1", "b", "creating");

        let inspector = ClusterInspector::new(api.clone());
        let first = inspector.inspect("c1").await.unwrap();
        let second = inspector.inspect("c1").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(api.inspection_count(), 2);
    }
}
