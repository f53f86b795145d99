//! JSON report structures shared by the subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use atropos_session::{Entry, Provenance};
use atropos_sode::{Segment, find_segments};

/// One contiguous run of positive probability.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentReport {
    /// First day of the run (1..=365).
    pub first_day: u16,
    /// Last day of the run; smaller than `first_day` when the run wraps
    /// through the new year.
    pub last_day: u16,
    /// Whether the run wraps through the day 365 -> day 1 boundary.
    pub wraps: bool,
    /// Days covered by the run.
    pub length: usize,
    /// Probability mass contained in the run.
    pub mass: f64,
}

impl From<&Segment> for SegmentReport {
    fn from(segment: &Segment) -> Self {
        Self {
            first_day: segment.first().get(),
            last_day: segment.last().get(),
            wraps: segment.wraps(),
            length: segment.len(),
            mass: segment.mass(),
        }
    }
}

/// One entry of the session pool.
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    /// 1-based entry id.
    pub id: usize,
    /// Specimen label, or the source ids for a combined entry.
    pub source: SourceReport,
    /// Lower gestation-age bound (days).
    pub min_day: u16,
    /// Upper gestation-age bound (days).
    pub max_day: u16,
    /// Day-of-year with the largest probability mass.
    pub peak_day: u16,
    /// Contiguous nonzero runs of the calendar.
    pub segments: Vec<SegmentReport>,
    /// Full 365-day probability array, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Vec<f64>>,
}

/// Where an entry came from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceReport {
    /// Built from one measured specimen.
    Measured {
        /// Specimen label.
        label: String,
    },
    /// Fused from existing entries.
    Combined {
        /// 1-based ids of the source entries.
        sources: Vec<usize>,
    },
}

/// Builds the report for one session entry.
pub fn entry_report(id: usize, entry: &Entry, full_calendar: bool) -> EntryReport {
    let segments = find_segments(entry.calendar());
    EntryReport {
        id,
        source: match entry.provenance() {
            Provenance::Measured { label } => SourceReport::Measured {
                label: label.clone(),
            },
            Provenance::Combined { sources } => SourceReport::Combined {
                sources: sources.iter().map(|s| s.get()).collect(),
            },
        },
        min_day: entry.range().min_day(),
        max_day: entry.range().max_day(),
        peak_day: entry.calendar().peak_day().get(),
        segments: segments.iter().map(SegmentReport::from).collect(),
        calendar: full_calendar.then(|| entry.calendar().probs().to_vec()),
    }
}

/// Serializes a report to the output path, or to stdout when none is given.
pub fn write_json<T: Serialize>(report: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
