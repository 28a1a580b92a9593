//! dockhand-controller — the discovery → filter → decide → act loop.
//!
//! The controller keeps a cluster's membership within bounds:
//!
//! - **`inspector`** — fresh membership reads (one query per decision)
//! - **`namer`** — timestamp-derived identifiers for new instances
//! - **`selector`** — prefix + ready-status candidate filtering
//! - **`controller`** — bounded scale-up/scale-down iteration
//! - **`snapshot`** — temp-instance metadata for auditing
//!
//! Every iteration re-reads live cluster state before acting. That is a
//! deliberate freshness-over-efficiency choice: other actors may mutate
//! the cluster between iterations, and the ceiling check must see reality
//! at the moment of each individual creation.

pub mod controller;
pub mod error;
pub mod inspector;
pub mod namer;
pub mod selector;
pub mod snapshot;

pub use controller::LifecycleController;
pub use error::{LifecycleError, LifecycleResult};
pub use inspector::ClusterInspector;
pub use selector::CandidateSelector;
pub use snapshot::Snapshot;
