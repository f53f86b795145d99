//! The circular probability calendar.

use atropos_calendar::{DayInterval, Doy};

/// Number of days on the probability calendar.
pub const CALENDAR_LEN: usize = 365;

/// A probability distribution over day-of-year with circular topology
/// (day 365 adjacent to day 1).
///
/// Entries are nonnegative and sum to 1 within floating tolerance. Days that
/// received no mass during convolution hold an exact 0.0 — segmentation
/// relies on the exact zero/nonzero distinction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityCalendar {
    probs: Vec<f64>,
}

impl ProbabilityCalendar {
    /// Wraps a 365-length probability vector.
    pub(crate) fn from_probs(probs: Vec<f64>) -> Self {
        debug_assert_eq!(probs.len(), CALENDAR_LEN);
        Self { probs }
    }

    /// The all-zero calendar, used to report an empty range intersection.
    pub fn zero() -> Self {
        Self {
            probs: vec![0.0; CALENDAR_LEN],
        }
    }

    /// Returns the per-day probabilities (length 365, day 1 at index 0).
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Returns the probability mass on a single day.
    pub fn day(&self, day: Doy) -> f64 {
        self.probs[day.index()]
    }

    /// Total mass over the whole calendar.
    pub fn total_mass(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Mass over a (possibly wrapping) interval of days.
    pub fn mass_over(&self, interval: &DayInterval) -> f64 {
        interval.days().map(|d| self.probs[d.index()]).sum()
    }

    /// Whether every day holds exactly zero mass.
    pub fn is_zero(&self) -> bool {
        self.probs.iter().all(|&p| p == 0.0)
    }

    /// Day with the largest probability mass (ties broken by earliest day).
    pub fn peak_day(&self) -> Doy {
        let mut best = 0;
        for (i, &p) in self.probs.iter().enumerate() {
            if p > self.probs[best] {
                best = i;
            }
        }
        Doy::FIRST.wrapping_add(best as u16)
    }
}
