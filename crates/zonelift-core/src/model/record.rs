// ── DNS record domain type ──

use serde::{Deserialize, Serialize};

/// Provider pseudo-types that alias `CNAME` on export. `NETLIFY` fronts the
/// provider's load balancer for apex/`www` records, `NETLIFYv6` its IPv6
/// equivalent; neither has a standard DNS meaning.
const CNAME_ALIASES: [&str; 2] = ["NETLIFY", "NETLIFYv6"];

/// One DNS resource record belonging to a zone.
///
/// `record_type` is kept as the provider's string mnemonic rather than an
/// enum: pseudo-types are provider-defined and anything the API returns must
/// pass through unharmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub zone_id: String,
    pub hostname: String,
    pub record_type: String,
    /// Time to live, in seconds.
    pub ttl: u32,
    /// Zero means "not set"; only meaningful for priority-bearing types.
    pub priority: u32,
    pub weight: Option<u32>,
    pub port: Option<u16>,
    pub flag: Option<String>,
    pub tag: Option<String>,
    /// Managed by the provider itself; not used when formatting.
    pub managed: bool,
    /// The record's data field: an address, hostname, or text.
    pub value: String,
}

impl Record {
    /// The standard DNS mnemonic emitted to the zone file. Provider
    /// pseudo-types map to `CNAME`; everything else passes through.
    pub fn output_type(&self) -> &str {
        if CNAME_ALIASES.contains(&self.record_type.as_str()) {
            "CNAME"
        } else {
            &self.record_type
        }
    }

    /// Whether this record's value names another host and therefore needs a
    /// trailing dot in zone-file output. Decided on the original type, so
    /// pseudo-types count as hostname-valued.
    pub fn is_hostname_valued(&self) -> bool {
        self.record_type == "CNAME" || CNAME_ALIASES.contains(&self.record_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(record_type: &str) -> Record {
        Record {
            id: "rec-1".into(),
            zone_id: "zone-1".into(),
            hostname: "www.example.com".into(),
            record_type: record_type.into(),
            ttl: 3600,
            priority: 0,
            weight: None,
            port: None,
            flag: None,
            tag: None,
            managed: false,
            value: "example.netlify.app".into(),
        }
    }

    #[test]
    fn pseudo_types_alias_cname() {
        assert_eq!(record("NETLIFY").output_type(), "CNAME");
        assert_eq!(record("NETLIFYv6").output_type(), "CNAME");
    }

    #[test]
    fn standard_types_pass_through() {
        assert_eq!(record("A").output_type(), "A");
        assert_eq!(record("TXT").output_type(), "TXT");
        assert_eq!(record("CNAME").output_type(), "CNAME");
    }

    #[test]
    fn hostname_valued_covers_cname_and_aliases() {
        assert!(record("CNAME").is_hostname_valued());
        assert!(record("NETLIFY").is_hostname_valued());
        assert!(record("NETLIFYv6").is_hostname_valued());
        assert!(!record("A").is_hostname_valued());
        assert!(!record("MX").is_hostname_valued());
    }
}
