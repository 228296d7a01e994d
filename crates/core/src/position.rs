//! Positions within flat and sectioned snapshots.

use core::fmt;
use core::ops::Range;

/// A location of an element within a snapshot.
///
/// Flat snapshots address elements by plain `usize` index; sectioned
/// snapshots use [`IndexPath`]. The trait exists so that change events
/// and the diff engine have a single definition covering both modes.
pub trait Position: Copy + Eq + Ord + fmt::Debug + Send + 'static {}

impl Position for usize {}
impl Position for IndexPath {}

/// A (section, row) location in a sectioned snapshot.
///
/// Ordering is section-major: every row of section `n` precedes every row
/// of section `n + 1`. The derived `Ord` relies on the field order below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPath {
    /// Outer (section) index.
    pub section: usize,
    /// Inner (row) index within the section.
    pub row: usize,
}

impl IndexPath {
    /// Creates a new index path.
    #[inline]
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

impl From<(usize, usize)> for IndexPath {
    #[inline]
    fn from((section, row): (usize, usize)) -> Self {
        Self { section, row }
    }
}

/// A contiguous run of section indices.
///
/// Section membership only ever changes at the tail of a snapshot, so the
/// set of added or deleted sections for one transition is always a
/// contiguous range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SectionRange {
    start: usize,
    end: usize,
}

impl SectionRange {
    /// Creates a range covering `start..end`.
    ///
    /// An inverted range (`start > end`) is normalized to empty.
    pub fn new(start: usize, end: usize) -> Self {
        if start > end {
            Self { start, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Creates an empty range.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// First section index in the range.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last section index in the range.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns true if `section` lies inside the range.
    #[inline]
    pub fn contains(&self, section: usize) -> bool {
        section >= self.start && section < self.end
    }

    /// Number of sections in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the range covers no sections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterates the section indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for SectionRange {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for SectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
