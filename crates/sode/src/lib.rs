//! Season-of-death estimates on the circular probability calendar.
//!
//! This crate turns a prior over conception dates plus a plausible span of
//! gestation ages into a wrap-around distribution over day-of-year of death,
//! and summarizes such distributions as contiguous date segments.
//!
//! # Pipeline
//!
//! ```text
//!  ┌───────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ ConceptionPrior│────▶│   convolve     │────▶│ ProbabilityCalendar│
//!  │ + age range    │     │  (accumulate,  │     │  (365-day ring)   │
//!  │                │     │   fold, norm)  │     │  -> segments      │
//!  └───────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use atropos_calendar::{CycleMap, Doy};
//! use atropos_sode::{ConceptionPrior, GestationAgeRange, convolve_death_date, find_segments};
//!
//! let prior = ConceptionPrior::uniform();
//! let range = GestationAgeRange::new(120, 160).unwrap();
//! let cycle = CycleMap::new(Doy::from_month_day(8, 15).unwrap());
//!
//! let calendar = convolve_death_date(&prior, range, &cycle).unwrap();
//! assert!((calendar.total_mass() - 1.0).abs() < 1e-9);
//!
//! let segments = find_segments(&calendar);
//! assert!(!segments.is_empty());
//! ```

mod calendar;
mod convolve;
mod error;
mod prior;
mod range;
mod segment;

pub use calendar::{CALENDAR_LEN, ProbabilityCalendar};
pub use convolve::convolve_death_date;
pub use error::SodeError;
pub use prior::ConceptionPrior;
pub use range::GestationAgeRange;
pub use segment::{Segment, find_segments};
