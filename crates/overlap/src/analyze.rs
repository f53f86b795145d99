//! Per-day envelope construction and derived probabilities.

use atropos_calendar::DayInterval;
use atropos_sode::ProbabilityCalendar;
use tracing::debug;

use crate::error::OverlapError;
use crate::result::{OverlapReport, OverlapResult};

/// Analyzes K calendars against a hypothesized date interval.
///
/// Per day `d` of the interval (in wrap-respecting order):
/// - `product(d)` — the joint density that all K death dates fall on `d`;
/// - `lower/upper envelope(d)` — the per-day min/max across calendars.
///
/// Derived scalars:
/// - `same_day_probability` — sum of the products over the interval;
/// - `all_within_probability` — product over calendars of each calendar's
///   mass on the interval.
///
/// A K = 1 full-year query is degenerate (the answer is 1 by construction)
/// and is reported as [`OverlapReport::DegenerateFullYear`], not an error.
///
/// # Errors
///
/// Returns [`OverlapError::NoCalendars`] if `calendars` is empty.
pub fn analyze_overlap(
    calendars: &[&ProbabilityCalendar],
    interval: DayInterval,
) -> Result<OverlapResult, OverlapError> {
    if calendars.is_empty() {
        return Err(OverlapError::NoCalendars);
    }

    let days: Vec<_> = interval.days().collect();
    let mut product = Vec::with_capacity(days.len());
    let mut lower = Vec::with_capacity(days.len());
    let mut upper = Vec::with_capacity(days.len());

    for &day in &days {
        let mut prod = 1.0_f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for cal in calendars {
            let p = cal.day(day);
            prod *= p;
            min = min.min(p);
            max = max.max(p);
        }
        product.push(prod);
        lower.push(min);
        upper.push(max);
    }

    let same_day_probability: f64 = product.iter().sum();
    let all_within_probability: f64 = calendars
        .iter()
        .map(|cal| cal.mass_over(&interval))
        .product();

    let report = match (calendars.len(), interval.is_full_year()) {
        (1, true) => OverlapReport::DegenerateFullYear,
        (1, false) => OverlapReport::AllWithinOnly,
        (_, true) => OverlapReport::SameDayOnly,
        (_, false) => OverlapReport::Both,
    };

    debug!(
        k = calendars.len(),
        interval = %interval,
        same_day_probability,
        all_within_probability,
        "analyzed overlap"
    );

    Ok(OverlapResult::new(
        interval,
        calendars.len(),
        days,
        product,
        lower,
        upper,
        same_day_probability,
        all_within_probability,
        report,
    ))
}
