//! Segmentation of a circular calendar into contiguous nonzero runs.

use atropos_calendar::Doy;

use crate::calendar::{CALENDAR_LEN, ProbabilityCalendar};

/// A maximal contiguous run of positive probability on the calendar ring.
///
/// `last < first` denotes a run wrapping through the day 365 -> day 1
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    first: Doy,
    last: Doy,
    mass: f64,
}

impl Segment {
    fn new(first: Doy, last: Doy, mass: f64) -> Self {
        Self { first, last, mass }
    }

    /// Returns the first day of the run.
    pub fn first(&self) -> Doy {
        self.first
    }

    /// Returns the last day of the run.
    pub fn last(&self) -> Doy {
        self.last
    }

    /// Returns the probability mass contained in the run.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether the run crosses the day 365 -> day 1 boundary.
    pub fn wraps(&self) -> bool {
        self.last < self.first
    }

    /// Number of days in the run.
    pub fn len(&self) -> usize {
        if self.wraps() {
            (366 - self.first.get() + self.last.get()) as usize
        } else {
            (self.last.get() - self.first.get() + 1) as usize
        }
    }

    /// A run always holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Scan state for the run detector.
enum Scan {
    OutsideRun,
    InsideRun { first: usize, mass: f64 },
}

/// Extracts the maximal contiguous nonzero runs of a circular calendar.
///
/// The returned segments are pairwise disjoint, their union is exactly the
/// calendar's nonzero support, and they are ordered by first day. An all-zero
/// calendar yields no segments; a calendar with no zero day anywhere yields
/// the single full-ring segment day 1 through day 365.
///
/// The scan rotates the ring to begin at an exact-zero day, which removes the
/// day 365 <-> day 1 adjacency special case: every run then starts and ends
/// inside the rotated scan.
pub fn find_segments(calendar: &ProbabilityCalendar) -> Vec<Segment> {
    let probs = calendar.probs();

    // Full ring: no zero day exists to rotate to.
    let Some(zero_at) = probs.iter().position(|&p| p == 0.0) else {
        return vec![Segment::new(Doy::FIRST, Doy::LAST, calendar.total_mass())];
    };

    let mut segments = Vec::new();
    let mut state = Scan::OutsideRun;

    for offset in 0..CALENDAR_LEN {
        let index = (zero_at + offset) % CALENDAR_LEN;
        let p = probs[index];
        state = match state {
            Scan::OutsideRun if p != 0.0 => Scan::InsideRun {
                first: index,
                mass: p,
            },
            Scan::OutsideRun => Scan::OutsideRun,
            Scan::InsideRun { first, mass } if p != 0.0 => Scan::InsideRun {
                first,
                mass: mass + p,
            },
            Scan::InsideRun { first, mass } => {
                let last = (index + CALENDAR_LEN - 1) % CALENDAR_LEN;
                segments.push(Segment::new(day_of(first), day_of(last), mass));
                Scan::OutsideRun
            }
        };
    }

    // The scan started on a zero day, so a run still open at the end of the
    // rotation terminates on the day before the rotation origin.
    if let Scan::InsideRun { first, mass } = state {
        let last = (zero_at + CALENDAR_LEN - 1) % CALENDAR_LEN;
        segments.push(Segment::new(day_of(first), day_of(last), mass));
    }

    segments.sort_by_key(|s| s.first());
    segments
}

fn day_of(index: usize) -> Doy {
    Doy::FIRST.wrapping_add(index as u16)
}
