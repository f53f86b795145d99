//! Estimate command: one death-date calendar and segment list per specimen.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span};

use crate::cli::EstimateArgs;
use crate::convert;
use crate::report::{EntryReport, entry_report, write_json};

/// Top-level report for the estimate command.
#[derive(Debug, Serialize)]
struct EstimateReport {
    /// Conception-window start as (month, day).
    window_start: (u8, u8),
    /// Per-specimen estimates in config order.
    entries: Vec<EntryReport>,
}

/// Run the per-specimen estimation pipeline.
pub fn run(args: EstimateArgs) -> Result<()> {
    let _cmd = info_span!("estimate").entered();

    let config = convert::load_config(&args.config)?;
    let (session, ids) = convert::build_session(&config)?;
    info!(n_specimens = ids.len(), "session built");

    let entries = ids
        .iter()
        .map(|&id| {
            let entry = session.entry(id)?;
            Ok(entry_report(id.get(), entry, args.full_calendars))
        })
        .collect::<Result<Vec<_>>>()?;

    let start = session.cycle().start();
    let report = EstimateReport {
        window_start: (start.month(), start.day()),
        entries,
    };
    write_json(&report, args.output.as_deref())
}
