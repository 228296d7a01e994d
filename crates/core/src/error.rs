//! Error types for Ripple.
//!
//! The engine is a closed in-memory component with no I/O failure surface;
//! the only errors are precondition violations, and those are reported
//! loudly rather than clamped or defaulted away.

use crate::position::IndexPath;
use thiserror::Error;

/// Result type alias for Ripple operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Precondition-violation errors for snapshot access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Flat index beyond the end of the snapshot.
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Section index beyond the snapshot's section count.
    #[error("section {section} out of bounds (section count {section_count})")]
    SectionOutOfBounds {
        section: usize,
        section_count: usize,
    },

    /// Row index beyond the end of its section.
    #[error("row out of bounds at {path} (section has {rows} rows)")]
    RowOutOfBounds { path: IndexPath, rows: usize },
}

impl Error {
    /// Creates a flat out-of-bounds error.
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }

    /// Creates a section out-of-bounds error.
    pub fn section_out_of_bounds(section: usize, section_count: usize) -> Self {
        Error::SectionOutOfBounds {
            section,
            section_count,
        }
    }

    /// Creates a row out-of-bounds error.
    pub fn row_out_of_bounds(path: IndexPath, rows: usize) -> Self {
        Error::RowOutOfBounds { path, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::index_out_of_bounds(4, 3);
        assert!(err.to_string().contains("index 4"));

        let err = Error::section_out_of_bounds(2, 1);
        assert!(err.to_string().contains("section 2"));

        let err = Error::row_out_of_bounds(IndexPath::new(0, 7), 5);
        assert!(err.to_string().contains("[0, 7]"));
    }
}
