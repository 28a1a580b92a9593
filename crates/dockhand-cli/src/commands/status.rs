use std::sync::Arc;

use dockhand_cluster::ClusterApi;
use dockhand_controller::{ClusterInspector, Snapshot};
use dockhand_core::LifecycleConfig;

pub async fn run(
    api: Arc<dyn ClusterApi>,
    config: &LifecycleConfig,
    format: &str,
) -> anyhow::Result<()> {
    let inspector = ClusterInspector::new(api.clone());
    let view = inspector.inspect(&config.cluster_id).await?;
    let snapshot = Snapshot::collect(api.as_ref(), config).await?;

    match format {
        "json" => {
            let out = serde_json::json!({
                "cluster": config.cluster_id,
                "member_count": view.member_count(),
                "members": view.members,
                "temporary_instances": snapshot,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        _ => {
            println!(
                "cluster {}: {} member(s)",
                config.cluster_id,
                view.member_count()
            );
            for member in &view.members {
                println!("  {member}");
            }
            if snapshot.is_empty() {
                println!("no temporary instances match prefix {:?}", config.name_prefix);
            } else {
                println!("temporary instances:");
                println!("{}", snapshot.to_json()?);
            }
        }
    }

    Ok(())
}
