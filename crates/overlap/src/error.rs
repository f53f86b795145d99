//! Error types for the atropos-overlap crate.

/// Error type for all fallible operations in the atropos-overlap crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OverlapError {
    /// Returned when no calendars are supplied to analyze.
    #[error("overlap analysis requires at least one calendar")]
    NoCalendars,
}
