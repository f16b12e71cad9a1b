//! Zone-file rendering.
//!
//! Produces one `$ORIGIN` directive followed by one tab-separated resource
//! record line per surviving record. Along the way: records repeating an
//! earlier hostname are dropped (first occurrence wins), provider
//! pseudo-types are rewritten to `CNAME`, hostname-valued records get a
//! trailing dot, and hostnames matching a redirect rule have their value
//! replaced by the rule's cleaned destination.
//!
//! Generation never fails and is deterministic for fixed inputs; dropped
//! duplicates and applied redirects are reported through `tracing` only.

use std::collections::HashSet;
use std::fmt::Write as _;

use tracing::{info, warn};

use crate::model::{Record, RedirectRule, Zone};
use crate::redirect;

/// Render `zone`'s records into zone-file text.
///
/// Records are processed in input order. The dedup set is scoped to this
/// call: repeated invocations with the same inputs yield byte-identical
/// output.
pub fn generate(zone: &Zone, records: &[Record], redirects: &[RedirectRule]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "$ORIGIN {}.", zone.name);

    // Hostnames already emitted; keyed on the dotted output name.
    let mut seen: HashSet<String> = HashSet::new();

    for record in records {
        let name = format!("{}.", record.hostname);
        if !seen.insert(name.clone()) {
            warn!(hostname = %record.hostname, "ignoring duplicate record name");
            continue;
        }

        let mut value = if record.is_hostname_valued() {
            format!("{}.", record.value)
        } else {
            record.value.clone()
        };

        if let Some(rule) = redirect::first_match(&record.hostname, redirects) {
            info!(hostname = %record.hostname, to = %rule.to, "redirect rule overrides record value");
            value = redirect::destination(&rule.to);
        }

        let priority = if record.priority == 0 {
            String::new()
        } else {
            format!("\t{}", record.priority)
        };

        let _ = writeln!(
            out,
            "{name}\tIN\t{ttl}\t{rtype}{priority}\t{value}",
            ttl = record.ttl,
            rtype = record.output_type(),
        );
    }

    out
}
