//! Fusing several entries believed to describe one individual.

use atropos_sode::{GestationAgeRange, ProbabilityCalendar, convolve_death_date};
use tracing::info;

use crate::entry::{Entry, EntryId, Provenance};
use crate::error::SessionError;
use crate::session::Session;

/// Result of a combine call.
#[derive(Debug, Clone)]
pub enum CombineOutcome {
    /// The source ranges intersect; a fused entry was appended to the pool.
    Combined {
        /// Id of the new entry.
        id: EntryId,
    },
    /// The source ranges share no gestation age. Nothing was appended; the
    /// all-zero calendar and the inverted bounds are reported for the
    /// presentation layer.
    EmptyIntersection {
        /// Maximum of the source lower bounds (exceeds `max_day`).
        min_day: u16,
        /// Minimum of the source upper bounds.
        max_day: u16,
        /// An all-zero calendar standing in for the impossible estimate.
        calendar: ProbabilityCalendar,
    },
}

impl Session {
    /// Fuses two or more entries by intersecting their gestation-age ranges
    /// and re-convolving on the narrower range.
    ///
    /// The intersection commutes, so the outcome is independent of source
    /// order, and combining the same set again reproduces the same fused
    /// range and calendar. A combined entry may itself be a source for a
    /// later call.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TooFewSources`] for fewer than two distinct
    /// sources and [`SessionError::UnknownEntry`] for an id not in the pool.
    /// An empty intersection is a normal outcome, not an error.
    pub fn combine(&mut self, sources: &[EntryId]) -> Result<CombineOutcome, SessionError> {
        let mut source_ids = sources.to_vec();
        source_ids.sort();
        source_ids.dedup();
        if source_ids.len() < 2 {
            return Err(SessionError::TooFewSources {
                n: source_ids.len(),
            });
        }

        let mut min_day = 1u16;
        let mut max_day = u16::MAX;
        for &id in &source_ids {
            let range = self.entry(id)?.range();
            min_day = min_day.max(range.min_day());
            max_day = max_day.min(range.max_day());
        }

        if min_day > max_day {
            info!(min_day, max_day, "combine found no common gestation age");
            return Ok(CombineOutcome::EmptyIntersection {
                min_day,
                max_day,
                calendar: ProbabilityCalendar::zero(),
            });
        }

        let range = GestationAgeRange::new(min_day, max_day)?;
        let calendar = convolve_death_date(self.prior(), range, self.cycle())?;

        let id = self.append(Entry::new(
            range,
            calendar,
            Provenance::Combined {
                sources: source_ids,
            },
        ));
        info!(id = %id, range = %range, "added combined entry");
        Ok(CombineOutcome::Combined { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atropos_calendar::{CycleMap, Doy};
    use atropos_sode::{ConceptionPrior, GestationAgeRange};

    fn session() -> Session {
        let cycle = CycleMap::new(Doy::from_month_day(8, 15).unwrap());
        Session::new(ConceptionPrior::uniform(), cycle)
    }

    fn add(s: &mut Session, label: &str, lo: u16, hi: u16) -> EntryId {
        s.add_measured(label, GestationAgeRange::new(lo, hi).unwrap())
            .unwrap()
    }

    #[test]
    fn too_few_sources() {
        let mut s = session();
        let a = add(&mut s, "a", 1, 10);
        assert_eq!(
            s.combine(&[a]).unwrap_err(),
            SessionError::TooFewSources { n: 1 }
        );
        assert_eq!(
            s.combine(&[]).unwrap_err(),
            SessionError::TooFewSources { n: 0 }
        );
    }

    #[test]
    fn duplicate_sources_count_once() {
        let mut s = session();
        let a = add(&mut s, "a", 1, 10);
        let b = add(&mut s, "b", 5, 20);
        assert_eq!(
            s.combine(&[a, a]).unwrap_err(),
            SessionError::TooFewSources { n: 1 }
        );
        let CombineOutcome::Combined { id } = s.combine(&[a, b, a]).unwrap() else {
            panic!("expected a fused entry");
        };
        let fused = s.entry(id).unwrap();
        assert_eq!((fused.range().min_day(), fused.range().max_day()), (5, 10));
        assert!(matches!(
            fused.provenance(),
            Provenance::Combined { sources } if sources == &[a, b]
        ));
    }

    #[test]
    fn unknown_source() {
        let mut s = session();
        let a = add(&mut s, "a", 1, 10);
        let bogus = EntryId::from_position(10);
        assert!(matches!(
            s.combine(&[a, bogus]).unwrap_err(),
            SessionError::UnknownEntry { id: 11, len: 1 }
        ));
    }

    #[test]
    fn overlapping_ranges_fuse() {
        let mut s = session();
        let a = add(&mut s, "a", 100, 160);
        let b = add(&mut s, "b", 140, 200);
        let CombineOutcome::Combined { id } = s.combine(&[a, b]).unwrap() else {
            panic!("expected a fused entry");
        };
        let fused = s.entry(id).unwrap();
        assert_eq!((fused.range().min_day(), fused.range().max_day()), (140, 160));
        assert!(matches!(
            fused.provenance(),
            Provenance::Combined { sources } if sources == &[a, b]
        ));
    }

    #[test]
    fn disjoint_ranges_report_empty_intersection() {
        let mut s = session();
        let a = add(&mut s, "a", 1, 50);
        let b = add(&mut s, "b", 100, 150);
        let before = s.len();
        let CombineOutcome::EmptyIntersection {
            min_day,
            max_day,
            calendar,
        } = s.combine(&[a, b]).unwrap()
        else {
            panic!("expected an empty intersection");
        };
        assert_eq!((min_day, max_day), (100, 50));
        assert!(calendar.is_zero());
        // Nothing appended.
        assert_eq!(s.len(), before);
    }

    #[test]
    fn combined_entry_can_be_recombined() {
        let mut s = session();
        let a = add(&mut s, "a", 100, 200);
        let b = add(&mut s, "b", 120, 220);
        let CombineOutcome::Combined { id: ab } = s.combine(&[a, b]).unwrap() else {
            panic!("expected a fused entry");
        };
        let c = add(&mut s, "c", 150, 250);
        let CombineOutcome::Combined { id: abc } = s.combine(&[ab, c]).unwrap() else {
            panic!("expected a fused entry");
        };
        let fused = s.entry(abc).unwrap();
        assert_eq!((fused.range().min_day(), fused.range().max_day()), (150, 200));
    }
}
