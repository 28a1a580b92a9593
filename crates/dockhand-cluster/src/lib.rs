//! dockhand-cluster — backends implementing the cluster API seam.
//!
//! The controller never talks to a cloud SDK directly; it goes through the
//! [`ClusterApi`] trait. Two implementations:
//!
//! - **`DocdbCluster`** — Amazon DocumentDB over `aws-sdk-docdb`.
//! - **`MemoryCluster`** — in-memory, for tests.

pub mod api;
pub mod docdb;
pub mod error;
pub mod memory;

pub use api::{ClusterApi, CreateRequest};
pub use docdb::DocdbCluster;
pub use error::{ClusterError, ClusterResult};
pub use memory::MemoryCluster;
