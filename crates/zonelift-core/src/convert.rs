// ── API-to-domain type conversions ──
//
// Bridges raw `zonelift_api` wire types into canonical `model` domain types.
// The payloads map field-for-field; the split keeps the formatter decoupled
// from whatever the provider renames next.

use crate::model::{Record, Zone};

impl From<zonelift_api::DnsZone> for Zone {
    fn from(zone: zonelift_api::DnsZone) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
        }
    }
}

impl From<zonelift_api::DnsRecord> for Record {
    fn from(record: zonelift_api::DnsRecord) -> Self {
        Self {
            id: record.id,
            zone_id: record.dns_zone_id,
            hostname: record.hostname,
            record_type: record.record_type,
            ttl: record.ttl,
            priority: record.priority,
            weight: record.weight,
            port: record.port,
            flag: record.flag,
            tag: record.tag,
            managed: record.managed,
            value: record.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Record, Zone};

    #[test]
    fn zone_converts() {
        let wire = zonelift_api::DnsZone {
            id: "zone-1".into(),
            name: "example.com".into(),
        };
        let zone = Zone::from(wire);
        assert_eq!(zone.id, "zone-1");
        assert_eq!(zone.name, "example.com");
    }

    #[test]
    fn record_carries_optional_fields_through() {
        let wire = zonelift_api::DnsRecord {
            id: "rec-1".into(),
            dns_zone_id: "zone-1".into(),
            hostname: "_sip._tcp.example.com".into(),
            record_type: "SRV".into(),
            ttl: 300,
            priority: 10,
            weight: Some(60),
            port: Some(5060),
            flag: None,
            tag: None,
            managed: false,
            value: "sip.example.com".into(),
        };
        let record = Record::from(wire);
        assert_eq!(record.zone_id, "zone-1");
        assert_eq!(record.weight, Some(60));
        assert_eq!(record.port, Some(5060));
        assert_eq!(record.priority, 10);
    }
}
