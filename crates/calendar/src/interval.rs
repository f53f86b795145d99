//! Possibly-wrapping intervals of calendar days.

use crate::doy::Doy;

/// A closed interval of calendar days on the 365-day ring.
///
/// Non-wrapping when `start <= end`; otherwise the interval runs from
/// `start` through day 365 and on to `end` (e.g. 330..=60 covers late
/// December and the following January/February).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInterval {
    start: Doy,
    end: Doy,
}

impl DayInterval {
    /// Creates an interval from `start` to `end`, inclusive on both sides.
    pub fn new(start: Doy, end: Doy) -> Self {
        Self { start, end }
    }

    /// The interval covering the whole year, day 1 through day 365.
    pub fn full_year() -> Self {
        Self {
            start: Doy::FIRST,
            end: Doy::LAST,
        }
    }

    /// Returns the first day of the interval.
    pub fn start(&self) -> Doy {
        self.start
    }

    /// Returns the last day of the interval.
    pub fn end(&self) -> Doy {
        self.end
    }

    /// Whether the interval runs through the day 365 -> day 1 boundary.
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Number of days covered (1..=365).
    pub fn len(&self) -> usize {
        if self.wraps() {
            (366 - self.start.get() + self.end.get()) as usize
        } else {
            (self.end.get() - self.start.get() + 1) as usize
        }
    }

    /// An interval is never empty; provided for iterator-style symmetry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the interval covers every day of the year.
    pub fn is_full_year(&self) -> bool {
        self.len() == 365
    }

    /// Whether `day` falls inside the interval.
    pub fn contains(&self, day: Doy) -> bool {
        if self.wraps() {
            day >= self.start || day <= self.end
        } else {
            day >= self.start && day <= self.end
        }
    }

    /// Iterates the covered days in interval order.
    ///
    /// For a wrapping interval this yields `start..=365` followed by
    /// `1..=end`.
    pub fn days(&self) -> impl Iterator<Item = Doy> + '_ {
        let start = self.start;
        (0..self.len()).map(move |offset| start.wrapping_add(offset as u16))
    }
}

impl std::fmt::Display for DayInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u16) -> Doy {
        Doy::new(d).unwrap()
    }

    #[test]
    fn non_wrapping_len_and_contains() {
        let iv = DayInterval::new(day(100), day(150));
        assert!(!iv.wraps());
        assert_eq!(iv.len(), 51);
        assert!(iv.contains(day(100)));
        assert!(iv.contains(day(150)));
        assert!(!iv.contains(day(99)));
        assert!(!iv.contains(day(151)));
    }

    #[test]
    fn wrapping_len_and_contains() {
        let iv = DayInterval::new(day(330), day(60));
        assert!(iv.wraps());
        assert_eq!(iv.len(), 96);
        assert!(iv.contains(day(330)));
        assert!(iv.contains(day(365)));
        assert!(iv.contains(day(1)));
        assert!(iv.contains(day(60)));
        assert!(!iv.contains(day(61)));
        assert!(!iv.contains(day(329)));
    }

    #[test]
    fn single_day_interval() {
        let iv = DayInterval::new(day(42), day(42));
        assert_eq!(iv.len(), 1);
        assert_eq!(iv.days().collect::<Vec<_>>(), vec![day(42)]);
    }

    #[test]
    fn days_order_respects_wrap() {
        let iv = DayInterval::new(day(364), day(2));
        let days: Vec<u16> = iv.days().map(Doy::get).collect();
        assert_eq!(days, vec![364, 365, 1, 2]);
    }

    #[test]
    fn full_year_variants() {
        assert!(DayInterval::full_year().is_full_year());
        assert_eq!(DayInterval::full_year().len(), 365);
        // Any rotation of the full ring also covers every day.
        let rotated = DayInterval::new(day(10), day(9));
        assert!(rotated.is_full_year());
    }

    #[test]
    fn display_format() {
        assert_eq!(DayInterval::new(day(330), day(60)).to_string(), "[330, 60]");
    }
}
