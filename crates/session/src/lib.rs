//! Session context for season-of-death estimation.
//!
//! A [`Session`] owns the conception prior, the cycle mapping, and an
//! append-only, 1-indexed pool of specimen entries. Measured entries enter
//! the pool through the convolver; combined entries are produced by fusing
//! the gestation-age ranges of existing entries and re-convolving on the
//! intersection.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ add_measured  │────▶│   entry pool   │────▶│    combine       │
//!  │ (convolve)    │     │  (append-only) │     │ (intersect +     │
//!  │               │     │                │     │  re-convolve)    │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use atropos_calendar::{CycleMap, Doy};
//! use atropos_session::{CombineOutcome, Session};
//! use atropos_sode::{ConceptionPrior, GestationAgeRange};
//!
//! let cycle = CycleMap::new(Doy::from_month_day(8, 15).unwrap());
//! let mut session = Session::new(ConceptionPrior::uniform(), cycle);
//!
//! let a = session.add_measured("femur A", GestationAgeRange::new(100, 160).unwrap()).unwrap();
//! let b = session.add_measured("tibia B", GestationAgeRange::new(140, 200).unwrap()).unwrap();
//!
//! match session.combine(&[a, b]).unwrap() {
//!     CombineOutcome::Combined { id } => {
//!         let fused = session.entry(id).unwrap();
//!         assert_eq!((fused.range().min_day(), fused.range().max_day()), (140, 160));
//!     }
//!     CombineOutcome::EmptyIntersection { .. } => unreachable!(),
//! }
//! ```

mod combine;
mod entry;
mod error;
mod session;

pub use combine::CombineOutcome;
pub use entry::{Entry, EntryId, Provenance};
pub use error::SessionError;
pub use session::Session;
