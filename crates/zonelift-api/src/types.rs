// ── Wire types for the DNS endpoints ──
//
// Field names mirror the provider's JSON payloads. Everything is defaulted:
// the API omits fields freely and a partial record must still decode.

use serde::{Deserialize, Serialize};

/// A DNS zone as returned by `GET dns_zones`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsZone {
    #[serde(default)]
    pub id: String,
    /// The zone's origin domain name, e.g. `example.com`.
    #[serde(default)]
    pub name: String,
}

/// A DNS record as returned by `GET dns_zones/{id}/dns_records`.
///
/// `record_type` is the provider's string mnemonic and may be a
/// provider-specific pseudo-type (`NETLIFY`, `NETLIFYv6`) rather than a
/// standard DNS type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub dns_zone_id: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub ttl: u32,
    /// Zero means "not set". Only priority-bearing types (`MX`) use it.
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    /// Managed by the provider itself (apex/`www` records it auto-creates).
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub value: String,
}
