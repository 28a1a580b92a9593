//! Metadata snapshot — temp-instance id → creation time.
//!
//! An auditing view over the discoverable candidates: for each member
//! carrying the temporary-instance prefix, the service-assigned creation
//! time. Serialized to JSON for status output.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use dockhand_cluster::ClusterApi;
use dockhand_core::{InstanceId, LifecycleConfig};

use crate::error::LifecycleResult;
use crate::selector;

/// Creation-time metadata for the temporary instances of one cluster.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    /// Instance id → creation time. `None` while still provisioning.
    pub entries: BTreeMap<InstanceId, Option<DateTime<Utc>>>,
}

impl Snapshot {
    /// Collect metadata for every prefix-matching member of the cluster.
    ///
    /// One fresh inspection plus one per-instance query per candidate.
    pub async fn collect(
        api: &dyn ClusterApi,
        config: &LifecycleConfig,
    ) -> LifecycleResult<Self> {
        let view = api.get_cluster(&config.cluster_id).await?;
        let candidates = selector::discoverable(&view.members, &config.name_prefix);

        let mut entries = BTreeMap::new();
        for id in candidates {
            let info = api.instance_info(&id).await?;
            entries.insert(id, info.created_at);
        }
        Ok(Self { entries })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockhand_cluster::MemoryCluster;

    #[tokio::test]
    async fn snapshot_covers_exactly_the_discoverable_subset() {
        let api = MemoryCluster::new();
        api.add_member("c1", "temp-instance-a", "available");
        api.add_member("c1", "temp-instance-b", "creating");
        api.add_member("c1", "prod-1", "available");

        let config = LifecycleConfig::new("c1");
        let snapshot = Snapshot::collect(&api, &config).await.unwrap();
        let keys: Vec<&str> = snapshot.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["temp-instance-a", "temp-instance-b"]);
    }

    #[tokio::test]
    async fn snapshot_of_empty_cluster_is_empty() {
        let api = MemoryCluster::new();
        let config = LifecycleConfig::new("c1");
        let snapshot = Snapshot::collect(&api, &config).await.unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn snapshot_serializes_to_json_map() {
        let api = MemoryCluster::new();
        api.add_member("c1", "temp-instance-a", "available");

        let config = LifecycleConfig::new("c1");
        let snapshot = Snapshot::collect(&api, &config).await.unwrap();
        let json = snapshot.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("temp-instance-a").is_some());
    }
}
