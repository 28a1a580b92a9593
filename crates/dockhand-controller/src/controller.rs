//! Lifecycle controller — bounded scale-up and scale-down runs.
//!
//! Both operations are bounded iterations, not long-running loops. Each
//! iteration re-reads live cluster state before acting: creations and
//! deletions complete asynchronously on the service side, and other
//! actors may be mutating the same cluster, so a count or candidate set
//! computed before the loop started would go stale. Iterations run
//! strictly sequentially; the first failure aborts the run and leaves
//! earlier iterations permanently applied.

use std::sync::Arc;

use tracing::info;

use dockhand_cluster::{ClusterApi, CreateRequest};
use dockhand_core::config::{ENGINE, TEMP_INSTANCE_TAG_KEY, TEMP_INSTANCE_TAG_VALUE};
use dockhand_core::{InstanceId, LifecycleConfig};

use crate::error::{LifecycleError, LifecycleResult};
use crate::inspector::ClusterInspector;
use crate::namer;
use crate::selector::CandidateSelector;

/// Name-generation hook. The default derives names from the wall clock;
/// tests substitute a deterministic sequence.
pub type NamerFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Orchestrates instance creation and teardown for one cluster.
pub struct LifecycleController {
    api: Arc<dyn ClusterApi>,
    config: LifecycleConfig,
    inspector: ClusterInspector,
    selector: CandidateSelector,
    namer: NamerFn,
}

impl LifecycleController {
    pub fn new(api: Arc<dyn ClusterApi>, config: LifecycleConfig) -> Self {
        Self {
            inspector: ClusterInspector::new(api.clone()),
            selector: CandidateSelector::new(api.clone()),
            api,
            config,
            namer: Box::new(|prefix| namer::next_name(prefix)),
        }
    }

    /// Replace the name generator.
    pub fn with_namer(mut self, f: NamerFn) -> Self {
        self.namer = f;
        self
    }

    /// Create `count` instances, one per iteration.
    ///
    /// Each iteration freshly inspects the cluster and refuses to create
    /// if membership would exceed the configured ceiling. A refusal
    /// aborts the remaining iterations; instances already created stay.
    pub async fn scale_up(&self, count: u32) -> LifecycleResult<Vec<InstanceId>> {
        let mut created = Vec::new();
        for iteration in 1..=count {
            let view = self.inspector.inspect(&self.config.cluster_id).await?;
            let members = view.member_count();
            info!(
                cluster = %self.config.cluster_id,
                members,
                iteration,
                "cluster members before this creation"
            );

            if members as u32 + 1 > self.config.ceiling {
                return Err(LifecycleError::CeilingExceeded {
                    members,
                    ceiling: self.config.ceiling,
                });
            }

            let instance_id = (self.namer)(&self.config.name_prefix);
            let id = self
                .api
                .create_instance(CreateRequest {
                    cluster_id: self.config.cluster_id.clone(),
                    instance_id,
                    instance_class: self.config.instance_class.clone(),
                    engine: ENGINE.to_string(),
                    tags: vec![(
                        TEMP_INSTANCE_TAG_KEY.to_string(),
                        TEMP_INSTANCE_TAG_VALUE.to_string(),
                    )],
                })
                .await?;
            info!(instance = %id, "instance created");
            created.push(id);
        }
        Ok(created)
    }

    /// Delete `count` eligible instances, one per iteration.
    ///
    /// Each iteration recomputes the deletable set (prefix match + ready
    /// status) from a fresh inspection, then deletes the first candidate
    /// not already deleted this run. The backend may keep reporting a
    /// deleted instance as ready for a while, so the controller tracks
    /// the identifiers it has acted on instead of trusting positions in
    /// a list whose ordering it does not control.
    pub async fn scale_down(&self, count: u32) -> LifecycleResult<Vec<InstanceId>> {
        let mut deleted: Vec<InstanceId> = Vec::new();
        for iteration in 1..=count {
            let view = self.inspector.inspect(&self.config.cluster_id).await?;
            let eligible = self
                .selector
                .deletable(&view.members, &self.config.name_prefix)
                .await?;

            if eligible.is_empty() {
                return Err(LifecycleError::NoEligibleCandidate {
                    prefix: self.config.name_prefix.clone(),
                });
            }

            // Reaching the error branch means every eligible candidate was
            // already deleted this run, so zero remain.
            let target = eligible
                .iter()
                .find(|id| !deleted.iter().any(|d| d == *id))
                .ok_or(LifecycleError::PositionOutOfRange {
                    wanted: iteration,
                    remaining: 0,
                })?
                .clone();

            let id = self.api.delete_instance(&target).await?;
            info!(instance = %id, iteration, "instance deletion requested");
            deleted.push(id);
        }
        Ok(deleted)
    }
}
