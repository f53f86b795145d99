//! Error types for the atropos-sode crate.

use atropos_calendar::MAX_GESTATION_DAY;

/// Error type for all fallible operations in the atropos-sode crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SodeError {
    /// Returned when a conception prior does not have exactly 245 weights.
    #[error("conception prior has {len} weights (expected 245)")]
    InvalidPriorLength {
        /// Number of weights provided.
        len: usize,
    },

    /// Returned when a prior weight is negative or non-finite.
    #[error("conception prior weight at offset {offset} is invalid: {value}")]
    InvalidPriorWeight {
        /// Offset of the offending weight.
        offset: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a prior's total mass is not 1 within tolerance.
    #[error("conception prior mass is {total}, expected 1.0 within 1e-6")]
    PriorMassMismatch {
        /// Total mass of the supplied weights.
        total: f64,
    },

    /// Returned when a gestation age range has min > max or min < 1.
    #[error("invalid gestation age range: [{min_day}, {max_day}] (need 1 <= min <= max)")]
    InvalidRange {
        /// Lower bound of the offending range.
        min_day: u16,
        /// Upper bound of the offending range.
        max_day: u16,
    },

    /// Returned when a gestation age range extends past the cycle bound.
    #[error("gestation age {max_day} exceeds the cycle bound {}", MAX_GESTATION_DAY)]
    RangeOutOfBounds {
        /// Upper bound of the offending range.
        max_day: u16,
    },

    /// Returned when the folded distribution has no mass to normalize.
    #[error("cannot normalize death-date distribution: total mass is {total}")]
    NormalizationFailure {
        /// Total mass of the folded array.
        total: f64,
    },
}
