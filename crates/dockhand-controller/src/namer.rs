//! Instance naming — prefix + local timestamp.
//!
//! Names are `{prefix}-{YYYYMMDDHHMMSS}` in the local timezone of the
//! invoking process, so they sort by creation time. Second-level
//! precision means two names generated within the same second collide;
//! that is a documented limitation, not something this module papers
//! over.

use chrono::{DateTime, Local};

/// Derive an instance name from `prefix` and the current local time.
pub fn next_name(prefix: &str) -> String {
    name_at(prefix, Local::now())
}

/// Derive an instance name for an explicit point in time.
pub fn name_at(prefix: &str, at: DateTime<Local>) -> String {
    format!("{prefix}-{}", at.format("%Y%m%d%H%M%S"))
}
