//! Extended conception cycle and the fold onto the 365-day ring.
//!
//! Gestation runs from a day inside the 245-day conception window to a death
//! date up to 334 days later, so death dates span up to roughly 1.5 calendar
//! years from the window start. The [`CycleMap`] assigns each of the 579
//! extended positions its calendar day-of-year; the last 214 positions revisit
//! days already covered near the window start, and folding sums both
//! contributions.

use crate::doy::Doy;

/// Number of positions in the extended conception cycle.
pub const EXTENDED_CYCLE_LEN: usize = 579;

/// Length of the conception window (and of any conception prior).
pub const PRIOR_LEN: usize = 245;

/// Largest gestation age (in days) the extended cycle can hold.
///
/// A gestation age `y` places prior weight at extended positions
/// `y..y + PRIOR_LEN`, so the last admissible age is
/// `EXTENDED_CYCLE_LEN - PRIOR_LEN`.
pub const MAX_GESTATION_DAY: u16 = (EXTENDED_CYCLE_LEN - PRIOR_LEN) as u16;

/// Static mapping from extended cycle positions to calendar days.
///
/// Built once from the conception-window start day and reused for every
/// convolution in a session. Position 0 is the window start itself; each
/// later position is one calendar day further, wrapping through the
/// day 365 -> day 1 boundary.
#[derive(Debug, Clone)]
pub struct CycleMap {
    start: Doy,
    days: Vec<Doy>,
}

impl CycleMap {
    /// Builds the mapping table for a conception window starting at `start`.
    pub fn new(start: Doy) -> Self {
        let days = (0..EXTENDED_CYCLE_LEN)
            .map(|pos| start.wrapping_add(pos as u16))
            .collect();
        Self { start, days }
    }

    /// Returns the conception-window start day.
    pub fn start(&self) -> Doy {
        self.start
    }

    /// Returns the calendar day for an extended cycle position.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= EXTENDED_CYCLE_LEN`.
    pub fn day_at(&self, pos: usize) -> Doy {
        self.days[pos]
    }

    /// Returns the extended positions that map to `day`.
    ///
    /// Every calendar day is covered at least once; days within the first
    /// `EXTENDED_CYCLE_LEN - 365` positions of the cycle are covered a second
    /// time one year later.
    pub fn positions_for(&self, day: Doy) -> (usize, Option<usize>) {
        let first = (day.get() + 365 - self.start.get()) as usize % 365;
        let second = first + 365;
        if second < EXTENDED_CYCLE_LEN {
            (first, Some(second))
        } else {
            (first, None)
        }
    }

    /// Folds an extended-cycle accumulator onto the 365-day ring.
    ///
    /// Each output slot receives the sum of the accumulator values at every
    /// extended position mapping to that day. Positions with no contribution
    /// leave their day exactly zero.
    pub fn fold(&self, extended: &[f64; EXTENDED_CYCLE_LEN]) -> [f64; 365] {
        let mut ring = [0.0_f64; 365];
        for (pos, &value) in extended.iter().enumerate() {
            ring[self.days[pos].index()] += value;
        }
        ring
    }
}
