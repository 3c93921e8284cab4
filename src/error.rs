//! Error types for changes.
//!
//! Computing a script never fails. These errors come from checking a script
//! against the lengths of the sequences it is meant to describe.

use std::fmt;
use thiserror::Error;

/// Which of the two diffed sequences an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// A change index that does not fit the sequence it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangesError {
    /// Move origin past the end of the old sequence
    #[error("move origin {origin} out of range for old sequence of length {len}")]
    OriginOutOfRange {
        /// Offending origin
        origin: usize,
        /// Length of the old sequence
        len: usize,
    },

    /// Destination past the end of the sequence it points into
    #[error("destination {destination} out of range for {sequence} sequence of length {len}")]
    DestinationOutOfRange {
        /// Offending destination
        destination: usize,
        /// Length of the sequence
        len: usize,
        /// Sequence the destination points into
        sequence: Side,
    },
}

/// Result type alias for script checks.
pub type Result<T> = std::result::Result<T, ChangesError>;
