//! In-memory cluster backend.
//!
//! Used by tests. Models the service's asynchronous side:
//! created instances enter `"creating"`, deleted instances flip to
//! `"deleting"` but stay listed as members (the real service keeps
//! reporting them for a while). `sticky_deletes` goes further and leaves
//! the status untouched after a delete, modelling observation lag.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use dockhand_core::{ClusterView, InstanceId, InstanceInfo};

use crate::api::{ClusterApi, CreateRequest};
use crate::error::{ClusterError, ClusterResult};

#[derive(Default)]
struct Inner {
    clusters: HashMap<String, Vec<InstanceId>>,
    instances: HashMap<InstanceId, InstanceInfo>,
    created: Vec<InstanceId>,
    deleted: Vec<InstanceId>,
    inspections: u32,
}

/// In-memory implementation of [`ClusterApi`].
#[derive(Default)]
pub struct MemoryCluster {
    inner: Mutex<Inner>,
    sticky_deletes: bool,
}

impl MemoryCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave instance status untouched after `delete_instance`, so the
    /// backend keeps reporting deleted instances as they were.
    pub fn with_sticky_deletes(mut self) -> Self {
        self.sticky_deletes = true;
        self
    }

    /// Seed a cluster member with the given status.
    pub fn add_member(&self, cluster_id: &str, instance_id: &str, status: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .clusters
            .entry(cluster_id.to_string())
            .or_default()
            .push(instance_id.to_string());
        inner.instances.insert(
            instance_id.to_string(),
            InstanceInfo {
                id: instance_id.to_string(),
                status: status.to_string(),
                created_at: Some(Utc::now()),
            },
        );
    }

    /// Overwrite one instance's reported status.
    pub fn set_status(&self, instance_id: &str, status: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(info) = inner.instances.get_mut(instance_id) {
            info.status = status.to_string();
        }
    }

    /// Identifiers passed to `create_instance`, in call order.
    pub fn created_ids(&self) -> Vec<InstanceId> {
        self.inner.lock().unwrap().created.clone()
    }

    /// Identifiers passed to `delete_instance`, in call order.
    pub fn deleted_ids(&self) -> Vec<InstanceId> {
        self.inner.lock().unwrap().deleted.clone()
    }

    /// Number of `get_cluster` calls observed.
    pub fn inspection_count(&self) -> u32 {
        self.inner.lock().unwrap().inspections
    }
}

#[async_trait::async_trait]
impl ClusterApi for MemoryCluster {
    async fn get_cluster(&self, cluster_id: &str) -> ClusterResult<ClusterView> {
        let mut inner = self.inner.lock().unwrap();
        inner.inspections += 1;
        let members = inner.clusters.get(cluster_id).cloned().unwrap_or_default();
        Ok(ClusterView { members })
    }

    async fn instance_info(&self, instance_id: &str) -> ClusterResult<InstanceInfo> {
        let inner = self.inner.lock().unwrap();
        inner
            .instances
            .get(instance_id)
            .cloned()
            .ok_or_else(|| ClusterError::instance(instance_id, "not found"))
    }

    async fn create_instance(&self, req: CreateRequest) -> ClusterResult<InstanceId> {
        let mut inner = self.inner.lock().unwrap();
        if inner.instances.contains_key(&req.instance_id) {
            return Err(ClusterError::instance(&req.instance_id, "already exists"));
        }
        inner
            .clusters
            .entry(req.cluster_id.clone())
            .or_default()
            .push(req.instance_id.clone());
        inner.instances.insert(
            req.instance_id.clone(),
            InstanceInfo {
                id: req.instance_id.clone(),
                status: "creating".to_string(),
                created_at: None,
            },
        );
        inner.created.push(req.instance_id.clone());
        Ok(req.instance_id)
    }

    async fn delete_instance(&self, instance_id: &str) -> ClusterResult<InstanceId> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.instances.contains_key(instance_id) {
            return Err(ClusterError::instance(instance_id, "not found"));
        }
        if !self.sticky_deletes
            && let Some(info) = inner.instances.get_mut(instance_id)
        {
            info.status = "deleting".to_string();
        }
        inner.deleted.push(instance_id.to_string());
        Ok(instance_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_cluster_is_empty_not_an_error() {
        let api = MemoryCluster::new();
        let view = api.get_cluster("nope").await.unwrap();
        assert_eq!(view.member_count(), 0);
    }

    #[tokio::test]
    async fn create_then_describe() {
        let api = MemoryCluster::new();
        let id = api
            .create_instance(CreateRequest {
                cluster_id: "c".to_string(),
                instance_id: "temp-instance-x".to_string(),
                instance_class: "db.t3.medium".to_string(),
                engine: "docdb".to_string(),
                tags: vec![],
            })
            .await
            .unwrap();
        assert_eq!(id, "temp-instance-x");

        let view = api.get_cluster("c").await.unwrap();
        assert_eq!(view.members, vec!["temp-instance-x"]);
        let info = api.instance_info("temp-instance-x").await.unwrap();
        assert_eq!(info.status, "creating");
    }

    #[tokio::test]
    async fn delete_flips_status_but_keeps_membership() {
        let api = MemoryCluster::new();
        api.add_member("c", "temp-instance-x", "available");
        api.delete_instance("temp-instance-x").await.unwrap();

        let view = api.get_cluster("c").await.unwrap();
        assert_eq!(view.member_count(), 1);
        let info = api.instance_info("temp-instance-x").await.unwrap();
        assert_eq!(info.status, "deleting");
    }

    #[tokio::test]
    async fn sticky_deletes_keep_status() {
        let api = MemoryCluster::new().with_sticky_deletes();
        api.add_member("c", "temp-instance-x", "available");
        api.delete_instance("temp-instance-x").await.unwrap();
        let info = api.instance_info("temp-instance-x").await.unwrap();
        assert_eq!(info.status, "available");
        assert_eq!(api.deleted_ids(), vec!["temp-instance-x"]);
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected() {
        let api = MemoryCluster::new();
        api.add_member("c", "temp-instance-x", "available");
        let err = api
            .create_instance(CreateRequest {
                cluster_id: "c".to_string(),
                instance_id: "temp-instance-x".to_string(),
                instance_class: "db.t3.medium".to_string(),
                engine: "docdb".to_string(),
                tags: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClusterError::Instance { .. }));
    }
}
