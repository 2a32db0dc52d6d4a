//! Error types for stanza.

/// Errors that can occur while loading or validating a word-vector table.
///
/// Degraded segmentation (too few sentences, non-finite costs) is *not* an
/// error — it surfaces as [`crate::Outcome::Fallback`] so a batch run never
/// aborts on one bad document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The vector table has no entries.
    #[error("vector table is empty")]
    EmptyTable,

    /// A vector's dimensionality disagrees with the rest of the table.
    #[error("vector for {token:?} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        /// Token whose vector had the wrong length.
        token: String,
        /// Dimensionality established by the first entry.
        expected: usize,
        /// Dimensionality actually found.
        found: usize,
    },

    /// A line in a vector-table file could not be parsed.
    #[error("malformed vector table line {line}: {reason}")]
    MalformedLine {
        /// One-based line number in the input.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// I/O failure while reading a vector-table file.
    #[error("vector table i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for stanza operations.
pub type Result<T> = std::result::Result<T, Error>;
