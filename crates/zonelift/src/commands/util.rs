//! Shared helpers for command handlers.

use secrecy::SecretString;

use zonelift_api::{DnsClient, DnsZone};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build an authenticated API client from global options.
pub fn build_client(global: &GlobalOpts) -> Result<DnsClient, CliError> {
    let token: SecretString = zonelift_config::resolve_token(global.token.clone())?;
    let client = match global.api_url.as_deref() {
        Some(base) => DnsClient::with_base_url(base, &token)?,
        None => DnsClient::new(&token)?,
    };
    Ok(client)
}

/// Find a zone by ID or domain name.
pub fn find_zone(zones: Vec<DnsZone>, selector: &str) -> Result<DnsZone, CliError> {
    zones
        .into_iter()
        .find(|z| z.id == selector || z.name == selector)
        .ok_or_else(|| CliError::UnknownZone {
            zone: selector.to_owned(),
        })
}
