//! Browser metadata snapshot for observability payloads

use serde::{Deserialize, Serialize};

/// Snapshot of the hosting browser, captured once at startup
///
/// The values are opaque diagnostics attached to failure reports; nothing in
/// the session core interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserInfo {
    pub user_agent: String,
    pub inner_width: f64,
    pub inner_height: f64,
    pub outer_width: f64,
    pub outer_height: f64,
}
