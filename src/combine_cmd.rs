//! Combine command: fuse specimens believed to belong to one individual.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, warn};

use atropos_session::CombineOutcome;

use crate::cli::CombineArgs;
use crate::convert;
use crate::report::{EntryReport, entry_report, write_json};

/// Top-level report for the combine command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum CombineJson {
    /// The ranges intersect; a fused estimate was produced.
    Combined {
        /// The fused entry.
        entry: EntryReport,
    },
    /// The ranges share no gestation age; no estimate is possible.
    EmptyIntersection {
        /// Maximum of the source lower bounds.
        min_day: u16,
        /// Minimum of the source upper bounds.
        max_day: u16,
    },
}

/// Run the fusion pipeline.
pub fn run(args: CombineArgs) -> Result<()> {
    let _cmd = info_span!("combine").entered();

    let config = convert::load_config(&args.config)?;
    let (mut session, ids) = convert::build_session(&config)?;
    let selected = convert::select_entries(&config, &ids, &args.specimens)?;
    info!(n_sources = selected.len(), "fusing specimens");

    let report = match session.combine(&selected)? {
        CombineOutcome::Combined { id } => {
            let entry = session.entry(id)?;
            CombineJson::Combined {
                entry: entry_report(id.get(), entry, false),
            }
        }
        CombineOutcome::EmptyIntersection {
            min_day, max_day, ..
        } => {
            warn!(
                min_day,
                max_day, "gestation-age ranges do not overlap; no fused estimate"
            );
            CombineJson::EmptyIntersection { min_day, max_day }
        }
    };
    write_json(&report, args.output.as_deref())
}
