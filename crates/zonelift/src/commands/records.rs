//! Record command handlers.

use tabled::Tabled;

use zonelift_core::Record;

use crate::cli::{GlobalOpts, RecordsArgs, RecordsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Hostname")]
    hostname: String,
    #[tabled(rename = "Type")]
    record_type: String,
    #[tabled(rename = "TTL")]
    ttl: u32,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Managed")]
    managed: String,
}

impl From<&Record> for RecordRow {
    fn from(r: &Record) -> Self {
        Self {
            hostname: r.hostname.clone(),
            record_type: r.record_type.clone(),
            ttl: r.ttl,
            priority: if r.priority == 0 {
                String::new()
            } else {
                r.priority.to_string()
            },
            value: r.value.clone(),
            managed: if r.managed { "yes".into() } else { String::new() },
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: RecordsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        RecordsCommand::List { zone } => {
            let client = util::build_client(global)?;
            let zones = client.list_zones().await?;
            let zone = util::find_zone(zones, &zone)?;

            let records: Vec<Record> = client
                .list_records(&zone.id)
                .await?
                .into_iter()
                .map(Record::from)
                .collect();

            let out = output::render_list(
                &global.output,
                &records,
                |r| RecordRow::from(r),
                |r| r.hostname.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
