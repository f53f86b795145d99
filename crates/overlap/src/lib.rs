//! Interval analysis across several death-date calendars.
//!
//! Given K calendars and a hypothesized (possibly year-wrapping) date
//! interval, this crate computes per-day product/min/max arrays and two
//! scalar probabilities: that all K death dates coincide on one day inside
//! the interval, and that every death date independently falls somewhere
//! inside the interval.
//!
//! # Quick start
//!
//! ```
//! use atropos_calendar::{CycleMap, DayInterval, Doy};
//! use atropos_overlap::{OverlapReport, analyze_overlap};
//! use atropos_sode::{ConceptionPrior, GestationAgeRange, convolve_death_date};
//!
//! let prior = ConceptionPrior::uniform();
//! let cycle = CycleMap::new(Doy::from_month_day(8, 15).unwrap());
//! let a = convolve_death_date(&prior, GestationAgeRange::new(100, 150).unwrap(), &cycle).unwrap();
//! let b = convolve_death_date(&prior, GestationAgeRange::new(120, 170).unwrap(), &cycle).unwrap();
//!
//! let winter = DayInterval::new(Doy::new(300).unwrap(), Doy::new(60).unwrap());
//! let result = analyze_overlap(&[&a, &b], winter).unwrap();
//! assert_eq!(result.report(), OverlapReport::Both);
//! assert!(result.same_day_probability() <= result.all_within_probability() + 1e-12);
//! ```

mod analyze;
mod error;
mod result;

pub use analyze::analyze_overlap;
pub use error::OverlapError;
pub use result::{OverlapReport, OverlapResult};
