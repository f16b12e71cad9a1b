//! Async client for the Netlify DNS API.
//!
//! A thin `reqwest`-based wrapper around the `dns_zones` endpoints the zone
//! exporter needs: bearer-token authentication, JSON decoding into wire
//! types, and a typed error taxonomy. Nothing here interprets the records —
//! that is `zonelift-core`'s job.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_URL, DnsClient};
pub use error::Error;
pub use types::{DnsRecord, DnsZone};
