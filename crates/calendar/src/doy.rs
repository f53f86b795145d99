//! Day-of-year newtype for the 365-day no-leap calendar.

use crate::error::CalendarError;

/// Day-of-year in the 365-day no-leap calendar (1..=365).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Month lengths, 1-indexed by month number (slot 0 is unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year at which each month opens, 1-indexed by month number.
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

impl Doy {
    /// First day of the year (January 1).
    pub const FIRST: Doy = Doy(1);

    /// Last day of the year (December 31).
    pub const LAST: Doy = Doy(365);

    /// Validates a raw day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] unless `doy` is in 1..=365.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        match doy {
            1..=365 => Ok(Self(doy)),
            _ => Err(CalendarError::InvalidDoy { doy }),
        }
    }

    /// Converts a calendar `(month, day)` date to its day-of-year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for a month outside 1..=12 and
    /// [`CalendarError::InvalidDay`] for a day the month does not have
    /// (February 29 is always rejected).
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        if month < 1 || month > 12 {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if day < 1 || day > max_day {
            return Err(CalendarError::InvalidDay { day, month, max_day });
        }
        Ok(Self(MONTH_START_DOY[month as usize] + u16::from(day) - 1))
    }

    /// The raw day-of-year value (1..=365).
    pub fn get(self) -> u16 {
        self.0
    }

    /// The 0-based position of this day, for indexing 365-slot arrays.
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    /// Advances this day by `days`, wrapping through the day 365 -> day 1
    /// boundary.
    pub fn wrapping_add(self, days: u16) -> Self {
        Self((self.0 - 1 + days) % 365 + 1)
    }

    /// The `(month, day)` calendar date of this day-of-year.
    pub fn month_day(self) -> (u8, u8) {
        // The month is the last entry of MONTH_START_DOY at or before this day.
        let mut month = 12;
        while MONTH_START_DOY[month] > self.0 {
            month -= 1;
        }
        let day = (self.0 - MONTH_START_DOY[month] + 1) as u8;
        (month as u8, day)
    }

    /// The month (1..=12) of this day-of-year.
    pub fn month(self) -> u8 {
        self.month_day().0
    }

    /// The day within the month (1..=31) of this day-of-year.
    pub fn day(self) -> u8 {
        self.month_day().1
    }
}

impl std::fmt::Display for Doy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bounds() {
        assert_eq!(Doy::new(1).unwrap().get(), 1);
        assert_eq!(Doy::new(365).unwrap().get(), 365);
        assert_eq!(
            Doy::new(0).unwrap_err(),
            CalendarError::InvalidDoy { doy: 0 }
        );
        assert_eq!(
            Doy::new(366).unwrap_err(),
            CalendarError::InvalidDoy { doy: 366 }
        );
    }

    #[test]
    fn from_month_day_anchors() {
        // Jan 1 = doy 1, Feb 28 = doy 59, Dec 31 = doy 365.
        assert_eq!(Doy::from_month_day(1, 1).unwrap().get(), 1);
        assert_eq!(Doy::from_month_day(2, 28).unwrap().get(), 59);
        assert_eq!(Doy::from_month_day(12, 31).unwrap().get(), 365);
    }

    #[test]
    fn from_month_day_rejects_feb_29() {
        assert_eq!(
            Doy::from_month_day(2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn from_month_day_rejects_month_13() {
        assert_eq!(
            Doy::from_month_day(13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn roundtrip_all_365() {
        for d in 1..=365u16 {
            let doy = Doy::new(d).unwrap();
            let (m, day) = doy.month_day();
            assert_eq!(
                Doy::from_month_day(m, day).unwrap(),
                doy,
                "roundtrip failed for doy {d}"
            );
        }
    }

    #[test]
    fn wrapping_add_crosses_year_boundary() {
        let d = Doy::new(360).unwrap();
        assert_eq!(d.wrapping_add(5).get(), 365);
        assert_eq!(d.wrapping_add(6).get(), 1);
        assert_eq!(d.wrapping_add(365).get(), 360);
        assert_eq!(d.wrapping_add(0).get(), 360);
    }

    #[test]
    fn table_integrity() {
        let total: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, 365);
        for m in 1..12usize {
            assert_eq!(
                MONTH_START_DOY[m] + DAYS_PER_MONTH[m] as u16,
                MONTH_START_DOY[m + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
        }
    }
}
