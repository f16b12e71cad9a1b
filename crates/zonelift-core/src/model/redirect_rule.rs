// ── Redirect rule domain type ──

use serde::{Deserialize, Serialize};

/// One HTTP redirect declared in the site's routing configuration
/// (a `[[redirects]]` table in `netlify.toml`).
///
/// Zone generation only consults `from`'s host component and `to`; `status`
/// and `force` are carried for completeness and default when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectRule {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub force: bool,
}
