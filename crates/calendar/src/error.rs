//! Error types for the atropos-calendar crate.

/// Validation failures for calendar values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// A day-of-year outside 1..=365.
    #[error("day of year {doy} is out of range (expected 1..=365)")]
    InvalidDoy {
        /// The rejected day-of-year.
        doy: u16,
    },

    /// A month number outside 1..=12.
    #[error("month {month} is out of range (expected 1..=12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u8,
    },

    /// A day the named month does not contain.
    #[error("day {day} does not exist in month {month} (last day is {max_day})")]
    InvalidDay {
        /// The rejected day number.
        day: u8,
        /// The month it was checked against.
        month: u8,
        /// The last valid day of that month.
        max_day: u8,
    },
}
