//! Overlap command: test a hypothesized date interval against specimens.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use atropos_calendar::{DayInterval, Doy};
use atropos_overlap::{OverlapReport, analyze_overlap};

use crate::cli::OverlapArgs;
use crate::convert;
use crate::report::write_json;

/// Top-level report for the overlap command.
#[derive(Debug, Serialize)]
struct OverlapJson {
    /// First day of the analyzed interval.
    start_day: u16,
    /// Last day of the analyzed interval.
    end_day: u16,
    /// Whether the interval wraps through the new year.
    wraps: bool,
    /// Number of calendars analyzed.
    n_specimens: usize,
    /// Which statistic(s) are meaningful for this query shape.
    report: &'static str,
    /// Probability all death dates coincide on one day inside the interval.
    same_day_probability: f64,
    /// Probability every death date independently falls inside the interval.
    all_within_probability: f64,
    /// Per-day joint density across specimens.
    product: Vec<f64>,
    /// Per-day minimum across specimens (charting envelope).
    lower_envelope: Vec<f64>,
    /// Per-day maximum across specimens (charting envelope).
    upper_envelope: Vec<f64>,
}

fn report_name(report: OverlapReport) -> &'static str {
    match report {
        OverlapReport::DegenerateFullYear => "degenerate_full_year",
        OverlapReport::AllWithinOnly => "all_within_only",
        OverlapReport::SameDayOnly => "same_day_only",
        OverlapReport::Both => "both",
    }
}

/// Run the interval analysis pipeline.
pub fn run(args: OverlapArgs) -> Result<()> {
    let _cmd = info_span!("overlap").entered();

    let config = convert::load_config(&args.config)?;
    let (session, ids) = convert::build_session(&config)?;
    let selected = convert::select_entries(&config, &ids, &args.specimens)?;

    let start_day = args.start_day.unwrap_or(config.overlap.start_day);
    let end_day = args.end_day.unwrap_or(config.overlap.end_day);
    let interval = DayInterval::new(
        Doy::new(start_day).context("invalid --start-day")?,
        Doy::new(end_day).context("invalid --end-day")?,
    );

    let calendars = selected
        .iter()
        .map(|&id| Ok(session.entry(id)?.calendar()))
        .collect::<Result<Vec<_>>>()?;
    let result = analyze_overlap(&calendars, interval)?;

    if result.report() == OverlapReport::DegenerateFullYear {
        info!("single specimen over the full year: mass is 1 by construction");
    }

    let report = OverlapJson {
        start_day,
        end_day,
        wraps: interval.wraps(),
        n_specimens: result.n_calendars(),
        report: report_name(result.report()),
        same_day_probability: result.same_day_probability(),
        all_within_probability: result.all_within_probability(),
        product: result.product().to_vec(),
        lower_envelope: result.lower_envelope().to_vec(),
        upper_envelope: result.upper_envelope().to_vec(),
    };
    write_json(&report, args.output.as_deref())
}
