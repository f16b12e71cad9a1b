// ── Zone domain type ──

use serde::{Deserialize, Serialize};

/// A DNS administrative domain, fetched once per migration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    /// The zone's origin name, e.g. `example.com`.
    pub name: String,
}
