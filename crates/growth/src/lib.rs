//! Growth-curve calibration for gestation-age resolution.
//!
//! The probability-calendar engine consumes gestation-age ranges; this crate
//! produces them from a measured bone dimension. A [`GrowthCurve`] holds
//! strictly monotonic (depth, age) calibration points for one anatomical
//! element; [`resolve_range`] interpolates a measured depth to an age and
//! widens it by the measurement's uncertainty half-width.
//!
//! # Quick start
//!
//! ```
//! use atropos_growth::{GrowthCurve, resolve_range};
//!
//! let curve = GrowthCurve::new(vec![
//!     (5.0, 60.0),
//!     (10.0, 120.0),
//!     (15.0, 200.0),
//!     (20.0, 300.0),
//! ])
//! .unwrap();
//!
//! let range = resolve_range(&curve, 12.5, 14.0).unwrap();
//! assert_eq!((range.min_day(), range.max_day()), (146, 174));
//! ```

mod curve;
mod error;
mod resolve;

pub use curve::GrowthCurve;
pub use error::GrowthError;
pub use resolve::resolve_range;
