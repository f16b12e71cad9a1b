//! Site-configuration loading and credential resolution for zonelift.
//!
//! The redirect rules consumed by zone generation live in the migrated
//! site's own configuration file (`netlify.toml`, `[[redirects]]` tables);
//! [`load_redirects`] parses them into [`RedirectRule`] values. The provider
//! API token comes from a CLI flag or the `NETLIFY_TOKEN` environment
//! variable, resolved by [`resolve_token`] into a [`SecretString`] so it
//! stays out of debug output.

use std::fs;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

use zonelift_core::model::RedirectRule;

/// Environment variable holding the provider API token.
pub const TOKEN_ENV: &str = "NETLIFY_TOKEN";

/// Default site configuration file probed when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "netlify.toml";

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML (or has mistyped keys).
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No token was supplied by flag or environment.
    #[error("no API token provided; set {TOKEN_ENV} or pass --token")]
    MissingToken,
}

// ── Site configuration ──────────────────────────────────────────────

/// The slice of the site configuration zone generation cares about. All
/// other top-level keys (build settings, headers, plugins) are ignored.
#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default)]
    redirects: Vec<RedirectRule>,
}

/// Load the redirect rules declared in the site configuration at `path`.
///
/// A file without a `redirects` key yields an empty list; a missing or
/// malformed file is an error for the caller to decide on.
pub fn load_redirects(path: &Path) -> Result<Vec<RedirectRule>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;

    let config: SiteConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })?;

    Ok(config.redirects)
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the API token: an explicit flag value wins, then the
/// `NETLIFY_TOKEN` environment variable. Empty values count as absent.
pub fn resolve_token(flag: Option<String>) -> Result<SecretString, ConfigError> {
    if let Some(token) = flag.filter(|t| !t.is_empty()) {
        return Ok(SecretString::from(token));
    }

    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.is_empty() => Ok(SecretString::from(token)),
        _ => Err(ConfigError::MissingToken),
    }
}
