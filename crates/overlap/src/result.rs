//! Result types for overlap analysis.

use atropos_calendar::{DayInterval, Doy};

/// Which of the two scalar probabilities is meaningful for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapReport {
    /// One calendar over the full year: the query is a no-op (the mass over
    /// the whole ring is 1 by construction).
    DegenerateFullYear,
    /// One calendar over a proper interval: only the within-interval mass is
    /// meaningful; "same day" is not a distinct statistic for K = 1.
    AllWithinOnly,
    /// Several calendars over the full year: only the same-day coincidence
    /// probability is meaningful (everything is trivially "within").
    SameDayOnly,
    /// Several calendars over a proper interval: both scalars apply.
    Both,
}

/// Per-day envelopes and scalar probabilities for one overlap query.
///
/// The product array and the two scalars are the authoritative output; the
/// min/max envelopes are reporting artifacts for charting the spread across
/// calendars.
#[derive(Debug, Clone)]
pub struct OverlapResult {
    interval: DayInterval,
    n_calendars: usize,
    days: Vec<Doy>,
    product: Vec<f64>,
    lower_envelope: Vec<f64>,
    upper_envelope: Vec<f64>,
    same_day_probability: f64,
    all_within_probability: f64,
    report: OverlapReport,
}

impl OverlapResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        interval: DayInterval,
        n_calendars: usize,
        days: Vec<Doy>,
        product: Vec<f64>,
        lower_envelope: Vec<f64>,
        upper_envelope: Vec<f64>,
        same_day_probability: f64,
        all_within_probability: f64,
        report: OverlapReport,
    ) -> Self {
        Self {
            interval,
            n_calendars,
            days,
            product,
            lower_envelope,
            upper_envelope,
            same_day_probability,
            all_within_probability,
            report,
        }
    }

    /// Returns the analyzed interval.
    pub fn interval(&self) -> DayInterval {
        self.interval
    }

    /// Returns the number of calendars analyzed.
    pub fn n_calendars(&self) -> usize {
        self.n_calendars
    }

    /// Returns the covered days in interval order.
    pub fn days(&self) -> &[Doy] {
        &self.days
    }

    /// Per-day product across all calendars (joint same-day density).
    pub fn product(&self) -> &[f64] {
        &self.product
    }

    /// Per-day minimum across all calendars (reporting envelope).
    pub fn lower_envelope(&self) -> &[f64] {
        &self.lower_envelope
    }

    /// Per-day maximum across all calendars (reporting envelope).
    pub fn upper_envelope(&self) -> &[f64] {
        &self.upper_envelope
    }

    /// Probability that all death dates coincide on a single day inside the
    /// interval.
    pub fn same_day_probability(&self) -> f64 {
        self.same_day_probability
    }

    /// Probability that every death date independently falls inside the
    /// interval.
    pub fn all_within_probability(&self) -> f64 {
        self.all_within_probability
    }

    /// Which statistic(s) the caller should report for this query shape.
    pub fn report(&self) -> OverlapReport {
        self.report
    }
}
