//! Error types for the atropos-growth crate.

/// Error type for all fallible operations in the atropos-growth crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrowthError {
    /// Returned when a calibration curve has fewer than two points.
    #[error("growth curve needs at least 2 calibration points, got {n}")]
    TooFewPoints {
        /// Number of points supplied.
        n: usize,
    },

    /// Returned when a calibration point holds a non-finite value.
    #[error("growth curve point {index} is not finite: ({depth}, {age_days})")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
        /// Depth coordinate of the point.
        depth: f64,
        /// Age coordinate of the point.
        age_days: f64,
    },

    /// Returned when calibration points are not strictly increasing in both
    /// depth and age.
    #[error("growth curve is not strictly increasing at point {index}")]
    NonMonotonic {
        /// Index of the first point violating monotonicity.
        index: usize,
    },

    /// Returned when a measured depth falls outside the calibrated span.
    #[error("measured depth {depth} outside calibrated span [{min_depth}, {max_depth}]")]
    DepthOutOfRange {
        /// The measured depth.
        depth: f64,
        /// Smallest calibrated depth.
        min_depth: f64,
        /// Largest calibrated depth.
        max_depth: f64,
    },

    /// Returned when an uncertainty half-width is negative or non-finite.
    #[error("invalid uncertainty half-width: {value}")]
    InvalidHalfWidth {
        /// The offending half-width.
        value: f64,
    },

    /// A resolved range was rejected by the gestation-age constructor.
    #[error(transparent)]
    Range(#[from] atropos_sode::SodeError),
}
