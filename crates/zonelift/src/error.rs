//! CLI error surface.
//!
//! Mirrors the run's failure taxonomy: fetch, config, and write failures are
//! all fatal and abort remaining work — a migration is re-run from scratch
//! rather than partially recovered.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Talking to the DNS API failed (transport or decode).
    #[error("DNS API request failed")]
    #[diagnostic(code(zonelift::fetch))]
    Fetch(#[from] zonelift_api::Error),

    /// Site configuration or credentials could not be resolved.
    #[error("configuration error")]
    #[diagnostic(code(zonelift::config))]
    Config(#[from] zonelift_config::ConfigError),

    /// The generated zone file could not be persisted.
    #[error("failed to write zone file {}", path.display())]
    #[diagnostic(code(zonelift::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `--zone` / `<zone>` selector matched nothing.
    #[error("no zone matching '{zone}' was found")]
    #[diagnostic(
        code(zonelift::unknown_zone),
        help("run `zonelift zones list` to see the zones on this account")
    )]
    UnknownZone { zone: String },
}
