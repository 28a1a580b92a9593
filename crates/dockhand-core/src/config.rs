//! dockhand.toml configuration parser.
//!
//! The config is immutable for the duration of a run — the controller is
//! handed a `LifecycleConfig` at construction and never mutates it. All
//! per-run derived state (member lists, candidate sets) is local to the
//! operation that computed it.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on cluster membership enforced before every creation.
pub const DEFAULT_CEILING: u32 = 15;

/// Default identifier prefix that marks an instance as temporary.
pub const DEFAULT_NAME_PREFIX: &str = "temp-instance";

/// Default instance class for provisioned instances.
pub const DEFAULT_INSTANCE_CLASS: &str = "db.t3.medium";

/// Database engine the instances run.
pub const ENGINE: &str = "docdb";

/// Tag key/value attached to every instance dockhand creates, so later
/// runs (and humans) can tell temporary instances apart.
pub const TEMP_INSTANCE_TAG_KEY: &str = "ScheduledTempInstance";
pub const TEMP_INSTANCE_TAG_VALUE: &str = "Yes";

/// Per-run configuration for the lifecycle controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Identifier of the cluster whose membership is managed.
    pub cluster_id: String,
    /// AWS region override. When absent the environment decides.
    #[serde(default)]
    pub region: Option<String>,
    /// Instance class for new instances (e.g. "db.t3.medium").
    #[serde(default = "default_instance_class")]
    pub instance_class: String,
    /// Identifier prefix marking instances as temporary.
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
    /// Maximum member count a creation may reach.
    #[serde(default = "default_ceiling")]
    pub ceiling: u32,
}

fn default_instance_class() -> String {
    DEFAULT_INSTANCE_CLASS.to_string()
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

fn default_ceiling() -> u32 {
    DEFAULT_CEILING
}

impl LifecycleConfig {
    /// Build a config with defaults for everything but the cluster id.
    pub fn new(cluster_id: impl Into<String>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            region: None,
            instance_class: default_instance_class(),
            name_prefix: default_name_prefix(),
            ceiling: default_ceiling(),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LifecycleConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
