//! Zone file export — the fetch → format → write pipeline.
//!
//! One pass per zone: fetch records, convert to domain types, render the
//! zone file, write `<zoneId>.zone` into the output directory, and report
//! the filename. Any fetch, config, or write failure aborts the run.

use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use tracing::debug;

use zonelift_core::{Record, RedirectRule, Zone, zonefile};

use crate::cli::{ExportArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ExportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let client = util::build_client(global)?;
    let redirects = load_redirects(&args)?;

    let mut zones = client.list_zones().await?;
    if let Some(selector) = &args.zone {
        zones = vec![util::find_zone(zones, selector)?];
    }

    let mut written = 0usize;
    for zone in zones {
        let records: Vec<Record> = client
            .list_records(&zone.id)
            .await?
            .into_iter()
            .map(Record::from)
            .collect();
        let zone = Zone::from(zone);

        let contents = zonefile::generate(&zone, &records, &redirects);
        let path = args.out_dir.join(format!("{}.zone", zone.id));
        fs::write(&path, &contents).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;

        output::print_output(&path.display().to_string(), global.quiet);
        written += 1;
    }

    if !global.quiet {
        let summary = format!("{written} zone file(s) written");
        if output::should_color(&global.color) {
            eprintln!("{}", summary.green());
        } else {
            eprintln!("{summary}");
        }
    }
    Ok(())
}

// ── Redirect resolution ─────────────────────────────────────────────

/// Resolve the redirect rule list for this run.
///
/// An explicitly requested file must load. The default `netlify.toml` is
/// optional: when absent the run proceeds with no redirects, but a present
/// file that fails to parse is still fatal.
fn load_redirects(args: &ExportArgs) -> Result<Vec<RedirectRule>, CliError> {
    if let Some(path) = &args.redirects {
        return Ok(zonelift_config::load_redirects(path)?);
    }

    let default = Path::new(zonelift_config::DEFAULT_CONFIG_FILE);
    if default.exists() {
        Ok(zonelift_config::load_redirects(default)?)
    } else {
        debug!("no site configuration found; exporting record values as-is");
        Ok(Vec::new())
    }
}
