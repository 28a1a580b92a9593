//! dockhand-core — shared domain types and configuration.
//!
//! Everything the controller and the cluster backends agree on lives here:
//! the view of a cluster's membership, per-instance info as reported by the
//! backing service, and the immutable per-run `LifecycleConfig`.

pub mod config;
pub mod types;

pub use config::LifecycleConfig;
pub use types::*;
