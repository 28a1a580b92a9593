use std::sync::Arc;

use tracing::info;

use dockhand_cluster::ClusterApi;
use dockhand_controller::LifecycleController;
use dockhand_core::LifecycleConfig;

pub async fn up(
    api: Arc<dyn ClusterApi>,
    config: LifecycleConfig,
    count: u32,
) -> anyhow::Result<()> {
    let cluster = config.cluster_id.clone();
    let controller = LifecycleController::new(api, config);
    let created = controller.scale_up(count).await?;
    for id in &created {
        println!("created {id}");
    }
    info!(%cluster, created = created.len(), "scale-up complete");
    Ok(())
}

pub async fn down(
    api: Arc<dyn ClusterApi>,
    config: LifecycleConfig,
    count: u32,
) -> anyhow::Result<()> {
    let cluster = config.cluster_id.clone();
    let controller = LifecycleController::new(api, config);
    let deleted = controller.scale_down(count).await?;
    for id in &deleted {
        println!("deleted {id}");
    }
    info!(%cluster, deleted = deleted.len(), "scale-down complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockhand_cluster::MemoryCluster;

    #[tokio::test]
    async fn up_provisions_through_the_controller() {
        let api = Arc::new(MemoryCluster::new());
        let config = LifecycleConfig::new("c1");

        up(api.clone(), config, 1).await.unwrap();
        assert_eq!(api.created_ids().len(), 1);
        assert!(api.created_ids()[0].starts_with("temp-instance-"));
    }

    #[tokio::test]
    async fn down_deletes_through_the_controller() {
        let api = Arc::new(MemoryCluster::new());
        api.add_member("c1", "temp-instance-a", "available");
        let config = LifecycleConfig::new("c1");

        down(api.clone(), config, 1).await.unwrap();
        assert_eq!(api.deleted_ids(), vec!["temp-instance-a"]);
    }

    #[tokio::test]
    async fn down_with_nothing_eligible_propagates_the_error() {
        let api = Arc::new(MemoryCluster::new());
        api.add_member("c1", "prod-1", "available");
        let config = LifecycleConfig::new("c1");

        assert!(down(api.clone(), config, 1).await.is_err());
        assert!(api.deleted_ids().is_empty());
    }
}
