//! # atropos-calendar
//!
//! Pure date arithmetic for the 365-day no-leap calendar and the extended
//! conception cycle used by the season-of-death engine.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Doy (1..=365)"] -->|".month_day()"| B["(month, day)"]
//!     B -->|"Doy::from_month_day()"| A
//!     A -->|"CycleMap::new()"| C["CycleMap (579 positions)"]
//!     C -->|".fold()"| D["365-day ring"]
//!     A -->|"DayInterval::new()"| E["DayInterval"]
//!     E -->|".days()"| F["Doy iterator (wrap-aware)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use atropos_calendar::{CycleMap, DayInterval, Doy};
//!
//! // Day-of-year conversions
//! let doy = Doy::from_month_day(3, 15).unwrap(); // Mar 15 -> DOY 74
//! assert_eq!(doy.get(), 74);
//!
//! // Extended cycle anchored at a conception-window start
//! let cycle = CycleMap::new(Doy::from_month_day(8, 15).unwrap());
//! assert_eq!(cycle.day_at(0), cycle.start());
//!
//! // Wrapping intervals
//! let winter = DayInterval::new(Doy::new(330).unwrap(), Doy::new(60).unwrap());
//! assert!(winter.wraps());
//! assert_eq!(winter.len(), 96);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype and month/day conversion |
//! | `cycle` | Extended conception cycle and the fold onto the 365-day ring |
//! | `interval` | Possibly-wrapping day intervals |
//! | `error` | Error types |

mod cycle;
mod doy;
mod error;
mod interval;

pub use cycle::{CycleMap, EXTENDED_CYCLE_LEN, MAX_GESTATION_DAY, PRIOR_LEN};
pub use doy::Doy;
pub use error::CalendarError;
pub use interval::DayInterval;
