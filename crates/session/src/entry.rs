//! Entries in the session pool.

use atropos_sode::{GestationAgeRange, ProbabilityCalendar};

/// 1-based identifier of an entry in a session's pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(usize);

impl EntryId {
    pub(crate) fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// Returns the 1-based id value.
    pub fn get(self) -> usize {
        self.0
    }

    pub(crate) fn position(self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How an entry came to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Built from a single specimen measurement.
    Measured {
        /// Caller-supplied specimen label.
        label: String,
    },
    /// Fused from existing entries by range intersection.
    Combined {
        /// Ids of the source entries, in ascending order.
        sources: Vec<EntryId>,
    },
}

/// One specimen estimate: a gestation-age range, the calendar derived from
/// it, and where it came from.
///
/// Entries are immutable once appended; combining produces new entries
/// rather than touching existing ones.
#[derive(Debug, Clone)]
pub struct Entry {
    range: GestationAgeRange,
    calendar: ProbabilityCalendar,
    provenance: Provenance,
}

impl Entry {
    pub(crate) fn new(
        range: GestationAgeRange,
        calendar: ProbabilityCalendar,
        provenance: Provenance,
    ) -> Self {
        Self {
            range,
            calendar,
            provenance,
        }
    }

    /// Returns the gestation-age range this entry was built from.
    pub fn range(&self) -> GestationAgeRange {
        self.range
    }

    /// Returns the death-date calendar.
    pub fn calendar(&self) -> &ProbabilityCalendar {
        &self.calendar
    }

    /// Returns the entry's provenance.
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}
