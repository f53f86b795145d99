//! Error types for the atropos-session crate.

use atropos_sode::SodeError;

/// Error type for all fallible operations in the atropos-session crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Returned when an entry id does not name an entry in the pool.
    #[error("unknown entry id {id} (pool holds {len} entries)")]
    UnknownEntry {
        /// The offending 1-based id.
        id: usize,
        /// Current pool size.
        len: usize,
    },

    /// Returned when combining fewer than two distinct entries.
    #[error("combining requires at least 2 distinct source entries, got {n}")]
    TooFewSources {
        /// Number of distinct sources supplied.
        n: usize,
    },

    /// An engine-level failure bubbled up from convolution or validation.
    #[error(transparent)]
    Sode(#[from] SodeError),
}
