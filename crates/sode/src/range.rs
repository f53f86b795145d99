//! Plausible span of elapsed gestation days implied by a measurement.

use atropos_calendar::MAX_GESTATION_DAY;

use crate::error::SodeError;

/// Inclusive range of gestation ages (in days) consistent with a
/// measurement's uncertainty.
///
/// Invariant: `1 <= min_day <= max_day <= MAX_GESTATION_DAY`. Immutable once
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestationAgeRange {
    min_day: u16,
    max_day: u16,
}

impl GestationAgeRange {
    /// Creates a range from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SodeError::InvalidRange`] if `min_day < 1` or
    /// `min_day > max_day`, and [`SodeError::RangeOutOfBounds`] if
    /// `max_day > MAX_GESTATION_DAY`.
    pub fn new(min_day: u16, max_day: u16) -> Result<Self, SodeError> {
        if min_day < 1 || min_day > max_day {
            return Err(SodeError::InvalidRange { min_day, max_day });
        }
        if max_day > MAX_GESTATION_DAY {
            return Err(SodeError::RangeOutOfBounds { max_day });
        }
        Ok(Self { min_day, max_day })
    }

    /// Returns the lower bound (days).
    pub fn min_day(&self) -> u16 {
        self.min_day
    }

    /// Returns the upper bound (days).
    pub fn max_day(&self) -> u16 {
        self.max_day
    }

    /// Number of gestation ages covered.
    pub fn width(&self) -> u16 {
        self.max_day - self.min_day + 1
    }

    /// Intersects two ranges, or `None` if they share no gestation age.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let min_day = self.min_day.max(other.min_day);
        let max_day = self.max_day.min(other.max_day);
        if min_day <= max_day {
            Some(Self { min_day, max_day })
        } else {
            None
        }
    }
}

impl std::fmt::Display for GestationAgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min_day, self.max_day)
    }
}
