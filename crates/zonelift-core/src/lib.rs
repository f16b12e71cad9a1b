//! Zone-file generation for DNS migrations off a hosting provider.
//!
//! This crate owns the transformation at the center of the exporter:
//!
//! - **[`model`]** — canonical domain types: [`Zone`], [`Record`],
//!   [`RedirectRule`].
//! - **[`redirect`]** — matches record hostnames against redirect rules
//!   declared in site configuration and cleans rule destinations for use as
//!   record values.
//! - **[`zonefile`]** — renders a zone and its records into zone-file text,
//!   deduplicating hostnames, rewriting provider pseudo-types, and applying
//!   redirect overrides.
//!
//! Conversions from the raw `zonelift_api` wire types live in [`convert`].
//!
//! Everything here is synchronous and free of I/O: callers supply fetched
//! data, and the only side effect is advisory `tracing` output for dropped
//! duplicates and redirect substitutions.

pub mod convert;
pub mod model;
pub mod redirect;
pub mod zonefile;

pub use model::{Record, RedirectRule, Zone};
