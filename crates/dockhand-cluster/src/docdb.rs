//! Amazon DocumentDB backend.
//!
//! Thin mapping from the [`ClusterApi`] seam onto `aws-sdk-docdb` calls:
//! DescribeDBClusters, DescribeDBInstances, CreateDBInstance,
//! DeleteDBInstance. All SDK failures collapse into `ClusterError::Api`
//! with the SDK's own message — the controller treats every one as fatal.

use aws_sdk_docdb::Client;
use aws_sdk_docdb::config::Region;
use aws_sdk_docdb::types::{Filter, Tag};
use tracing::debug;

use dockhand_core::{ClusterView, InstanceId, InstanceInfo};

use crate::api::{ClusterApi, CreateRequest};
use crate::error::{ClusterError, ClusterResult};

/// DocumentDB-backed cluster API.
pub struct DocdbCluster {
    client: Client,
}

impl DocdbCluster {
    /// Resolve credentials/region from the environment and build a client.
    ///
    /// An explicit `region` overrides whatever the environment resolves.
    pub async fn connect(region: Option<&str>) -> Self {
        let aws_config = if let Some(region) = region {
            aws_config::from_env()
                .region(Region::new(region.to_string()))
                .load()
                .await
        } else {
            aws_config::load_from_env().await
        };
        Self {
            client: Client::new(&aws_config),
        }
    }

    /// Wrap an existing SDK client (used by integration tests against
    /// local endpoints).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ClusterApi for DocdbCluster {
    async fn get_cluster(&self, cluster_id: &str) -> ClusterResult<ClusterView> {
        let resp = self
            .client
            .describe_db_clusters()
            .db_cluster_identifier(cluster_id)
            .filters(
                Filter::builder()
                    .name("db-cluster-id")
                    .values(cluster_id)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| ClusterError::Api(e.to_string()))?;

        let mut members = Vec::new();
        for cluster in resp.db_clusters() {
            for member in cluster.db_cluster_members() {
                if let Some(id) = member.db_instance_identifier() {
                    members.push(id.to_string());
                }
            }
        }
        debug!(%cluster_id, members = members.len(), "described cluster");
        Ok(ClusterView { members })
    }

    async fn instance_info(&self, instance_id: &str) -> ClusterResult<InstanceInfo> {
        let resp = self
            .client
            .describe_db_instances()
            .db_instance_identifier(instance_id)
            .send()
            .await
            .map_err(|e| ClusterError::Api(e.to_string()))?;

        let instance = resp
            .db_instances()
            .first()
            .ok_or_else(|| ClusterError::instance(instance_id, "not found"))?;

        let status = instance
            .db_instance_status()
            .unwrap_or_default()
            .to_string();
        let created_at = instance
            .instance_create_time()
            .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos()));

        Ok(InstanceInfo {
            id: instance
                .db_instance_identifier()
                .unwrap_or(instance_id)
                .to_string(),
            status,
            created_at,
        })
    }

    async fn create_instance(&self, req: CreateRequest) -> ClusterResult<InstanceId> {
        let mut call = self
            .client
            .create_db_instance()
            .db_cluster_identifier(&req.cluster_id)
            .db_instance_class(&req.instance_class)
            .db_instance_identifier(&req.instance_id)
            .engine(&req.engine);
        for (key, value) in &req.tags {
            call = call.tags(Tag::builder().key(key).value(value).build());
        }

        let resp = call
            .send()
            .await
            .map_err(|e| ClusterError::Api(e.to_string()))?;

        // The service stores identifiers lowercased; report what it stored.
        let created = resp
            .db_instance()
            .and_then(|i| i.db_instance_identifier())
            .unwrap_or(&req.instance_id)
            .to_string();
        Ok(created)
    }

    async fn delete_instance(&self, instance_id: &str) -> ClusterResult<InstanceId> {
        let resp = self
            .client
            .delete_db_instance()
            .db_instance_identifier(instance_id)
            .send()
            .await
            .map_err(|e| ClusterError::Api(e.to_string()))?;

        let deleted = resp
            .db_instance()
            .and_then(|i| i.db_instance_identifier())
            .unwrap_or(instance_id)
            .to_string();
        Ok(deleted)
    }
}
