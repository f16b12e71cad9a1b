//! Zone command handlers.

use tabled::Tabled;

use zonelift_core::Zone;

use crate::cli::{GlobalOpts, ZonesArgs, ZonesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Domain")]
    domain: String,
}

impl From<&Zone> for ZoneRow {
    fn from(z: &Zone) -> Self {
        Self {
            id: z.id.clone(),
            domain: z.name.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ZonesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ZonesCommand::List => {
            let client = util::build_client(global)?;
            let zones: Vec<Zone> = client
                .list_zones()
                .await?
                .into_iter()
                .map(Zone::from)
                .collect();

            let out = output::render_list(
                &global.output,
                &zones,
                |z| ZoneRow::from(z),
                |z| z.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
