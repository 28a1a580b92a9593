//! Candidate selection — naming-prefix and ready-status filters.
//!
//! The candidate set is an ephemeral view over a freshly inspected member
//! list; it is never persisted and is recomputed at every decision point.

use std::sync::Arc;

use tracing::debug;

use dockhand_cluster::ClusterApi;
use dockhand_core::InstanceId;

use crate::error::LifecycleResult;

/// Literal, case-sensitive prefix filter over a member list.
///
/// Order is preserved; no pattern matching is applied.
pub fn discoverable(members: &[InstanceId], prefix: &str) -> Vec<InstanceId> {
    members
        .iter()
        .filter(|id| id.starts_with(prefix))
        .cloned()
        .collect()
}

/// Filters cluster members down to deletable candidates.
pub struct CandidateSelector {
    api: Arc<dyn ClusterApi>,
}

impl CandidateSelector {
    pub fn new(api: Arc<dyn ClusterApi>) -> Self {
        Self { api }
    }

    /// Narrow `members` to identifiers that carry the temporary-instance
    /// prefix AND report the ready status, in encounter order.
    ///
    /// Costs one status query per prefix-matching member. An empty result
    /// is valid here; the controller decides whether that is fatal.
    pub async fn deletable(
        &self,
        members: &[InstanceId],
        prefix: &str,
    ) -> LifecycleResult<Vec<InstanceId>> {
        let candidates = discoverable(members, prefix);
        let mut ready = Vec::new();
        for id in candidates {
            let info = self.api.instance_info(&id).await?;
            if info.is_ready() {
                ready.push(id);
            } else {
                debug!(%id, status = %info.status, "candidate not ready, skipping");
            }
        }
        Ok(ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockhand_cluster::MemoryCluster;

    fn ids(v: &[&str]) -> Vec<InstanceId> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn discoverable_matches_literal_prefix_only() {
        let members = ids(&[
            "temp-instance-20240101120000",
            "other-temp-instance-x",
            "prod-1",
            "temp-instance-b",
        ]);
        assert_eq!(
            discoverable(&members, "temp-instance"),
            ids(&["temp-instance-20240101120000", "temp-instance-b"])
        );
    }

    #[test]
    fn discoverable_is_case_sensitive() {
        let members = ids(&["Temp-Instance-a", "temp-instance-b"]);
        assert_eq!(discoverable(&members, "temp-instance"), ids(&["temp-instance-b"]));
    }

    #[test]
    fn discoverable_preserves_order() {
        let members = ids(&["temp-instance-z", "prod", "temp-instance-a"]);
        assert_eq!(
            discoverable(&members, "temp-instance"),
            ids(&["temp-instance-z", "temp-instance-a"])
        );
    }

    #[tokio::test]
    async fn deletable_keeps_only_available_status() {
        let api = Arc::new(MemoryCluster::new());
        api.add_member("c", "temp-instance-a", "available");
        api.add_member("c", "temp-instance-b", "creating");
        api.add_member("c", "temp-instance-c", "some-future-status");
        api.add_member("c", "prod-1", "available");

        let members = ids(&[
            "temp-instance-a",
            "temp-instance-b",
            "temp-instance-c",
            "prod-1",
        ]);
        let selector = CandidateSelector::new(api);
        let deletable = selector.deletable(&members, "temp-instance").await.unwrap();
        assert_eq!(deletable, ids(&["temp-instance-a"]));
    }

    #[tokio::test]
    async fn deletable_empty_is_ok_not_error() {
        let api = Arc::new(MemoryCluster::new());
        api.add_member("c", "temp-instance-a", "creating");

        let selector = CandidateSelector::new(api);
        let deletable = selector
            .deletable(&ids(&["temp-instance-a"]), "temp-instance")
            .await
            .unwrap();
        assert!(deletable.is_empty());
    }
}
