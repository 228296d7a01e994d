//! Two-level snapshot type for sectioned collections.

use crate::error::{Error, Result};
use crate::position::IndexPath;

/// A sectioned snapshot: an ordered list of sections, each an ordered run
/// of rows.
///
/// `Sections` is a plain value type; the reactive layer captures it by
/// clone and treats the captured copy as immutable for diffing. Iteration
/// is section-major (every row of a section before the first row of the
/// next), and empty interior sections are skipped when advancing a path.
///
/// All positional access is checked: an out-of-range section or row is an
/// [`Error`], never a silently produced default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sections<T>(Vec<Vec<T>>);

impl<T> Sections<T> {
    /// Creates an empty snapshot with no sections.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of sections, including empty ones.
    #[inline]
    pub fn section_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of rows across all sections.
    pub fn total_len(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Returns true if the snapshot holds no rows at all.
    ///
    /// A snapshot consisting only of empty sections is considered empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Vec::is_empty)
    }

    /// The rows of one section.
    pub fn section(&self, section: usize) -> Result<&[T]> {
        self.0
            .get(section)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::section_out_of_bounds(section, self.0.len()))
    }

    /// The row at `path`.
    pub fn get(&self, path: IndexPath) -> Result<&T> {
        let rows = self.section(path.section)?;
        rows.get(path.row)
            .ok_or_else(|| Error::row_out_of_bounds(path, rows.len()))
    }

    /// Iterates all rows with their paths, in section-major order.
    ///
    /// Empty sections contribute nothing.
    pub fn rows(&self) -> impl Iterator<Item = (IndexPath, &T)> {
        self.0.iter().enumerate().flat_map(|(section, rows)| {
            rows.iter()
                .enumerate()
                .map(move |(row, value)| (IndexPath::new(section, row), value))
        })
    }

    /// The path of the first row position.
    #[inline]
    pub fn start_path(&self) -> IndexPath {
        IndexPath::new(0, 0)
    }

    /// One past the last row of the last section.
    ///
    /// With no sections this is `[0, 0]`; with an empty last section it is
    /// `[last, 0]`. Equal to `start_path()` exactly when iteration would
    /// yield nothing from the last section onward.
    pub fn end_path(&self) -> IndexPath {
        match self.0.last() {
            None => IndexPath::new(0, 0),
            Some(rows) => IndexPath::new(self.0.len() - 1, rows.len()),
        }
    }

    /// The path following `path` in section-major order.
    ///
    /// `path` must address an existing row. Advancing past the end of a
    /// section skips empty sections until the next row, or returns
    /// [`end_path`](Self::end_path) when no rows remain.
    pub fn path_after(&self, path: IndexPath) -> Result<IndexPath> {
        let rows = self.section(path.section)?;
        if path.row >= rows.len() {
            return Err(Error::row_out_of_bounds(path, rows.len()));
        }
        if path.row + 1 < rows.len() {
            return Ok(IndexPath::new(path.section, path.row + 1));
        }
        let mut next = path.section + 1;
        while next < self.0.len() {
            if self.0[next].is_empty() {
                next += 1;
                continue;
            }
            return Ok(IndexPath::new(next, 0));
        }
        Ok(self.end_path())
    }

    /// Consumes the snapshot, returning the underlying sections.
    pub fn into_inner(self) -> Vec<Vec<T>> {
        self.0
    }

    /// Borrow of the underlying sections.
    #[inline]
    pub fn as_slice(&self) -> &[Vec<T>] {
        &self.0
    }
}

impl<T> From<Vec<Vec<T>>> for Sections<T> {
    #[inline]
    fn from(sections: Vec<Vec<T>>) -> Self {
        Self(sections)
    }
}

impl<T> FromIterator<Vec<T>> for Sections<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
