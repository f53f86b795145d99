//! The session context owning the entry pool.

use atropos_calendar::CycleMap;
use atropos_sode::{ConceptionPrior, GestationAgeRange, convolve_death_date};
use tracing::info;

use crate::entry::{Entry, EntryId, Provenance};
use crate::error::SessionError;

/// Owns the conception prior, the cycle mapping, and the append-only pool of
/// specimen entries for one analysis session.
///
/// All operations read the pool by reference; only [`Session::add_measured`]
/// and [`Session::combine`] append to it. Concurrent sessions each own an
/// independent pool.
#[derive(Debug)]
pub struct Session {
    prior: ConceptionPrior,
    cycle: CycleMap,
    entries: Vec<Entry>,
}

impl Session {
    /// Creates an empty session for the given prior and cycle mapping.
    pub fn new(prior: ConceptionPrior, cycle: CycleMap) -> Self {
        Self {
            prior,
            cycle,
            entries: Vec::new(),
        }
    }

    /// Returns the session's conception prior.
    pub fn prior(&self) -> &ConceptionPrior {
        &self.prior
    }

    /// Returns the session's cycle mapping.
    pub fn cycle(&self) -> &CycleMap {
        &self.cycle
    }

    /// Convolves a measured gestation-age range and appends the resulting
    /// entry.
    ///
    /// # Errors
    ///
    /// Propagates [`atropos_sode::SodeError`] from the convolution.
    pub fn add_measured(
        &mut self,
        label: impl Into<String>,
        range: GestationAgeRange,
    ) -> Result<EntryId, SessionError> {
        let label = label.into();
        let calendar = convolve_death_date(&self.prior, range, &self.cycle)?;
        let id = self.append(Entry::new(range, calendar, Provenance::Measured { label }));
        info!(id = %id, range = %range, "added measured entry");
        Ok(id)
    }

    /// Returns the entry with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownEntry`] if `id` is not in the pool.
    pub fn entry(&self, id: EntryId) -> Result<&Entry, SessionError> {
        self.entries
            .get(id.position())
            .ok_or(SessionError::UnknownEntry {
                id: id.get(),
                len: self.entries.len(),
            })
    }

    /// Returns all entries in append order (entry 1 first).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the ids of all entries in append order.
    pub fn ids(&self) -> Vec<EntryId> {
        (0..self.entries.len()).map(EntryId::from_position).collect()
    }

    /// Number of entries in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn append(&mut self, entry: Entry) -> EntryId {
        self.entries.push(entry);
        EntryId::from_position(self.entries.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atropos_calendar::Doy;

    fn session() -> Session {
        let cycle = CycleMap::new(Doy::from_month_day(8, 15).unwrap());
        Session::new(ConceptionPrior::uniform(), cycle)
    }

    #[test]
    fn new_session_is_empty() {
        let s = session();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.ids().is_empty());
    }

    #[test]
    fn add_measured_appends_in_order() {
        let mut s = session();
        let a = s
            .add_measured("femur A", GestationAgeRange::new(100, 150).unwrap())
            .unwrap();
        let b = s
            .add_measured("tibia B", GestationAgeRange::new(120, 170).unwrap())
            .unwrap();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.ids(), vec![a, b]);

        let entry = s.entry(a).unwrap();
        assert_eq!(entry.range().min_day(), 100);
        assert!(matches!(
            entry.provenance(),
            Provenance::Measured { label } if label == "femur A"
        ));
        assert!((entry.calendar().total_mass() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_entry_id() {
        let s = session();
        let err = s.entry(EntryId::from_position(4)).unwrap_err();
        assert_eq!(err, SessionError::UnknownEntry { id: 5, len: 0 });
    }
}
