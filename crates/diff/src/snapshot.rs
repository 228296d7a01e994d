//! Mode seam: one trait covering both snapshot shapes.

use crate::{diff_flat, diff_sections};
use ripple_core::{ChangeEvent, IndexPath, Position, Sections};

/// A diffable snapshot shape.
///
/// Implemented by `Vec<T>` (flat mode) and [`Sections<T>`] (sectioned
/// mode). The reactive engine is generic over this trait, which is how
/// the two modes share one store/queue/notification pipeline.
pub trait Snapshot: Clone + Send + Sync + 'static {
    /// Position type carried by change events over this shape.
    type Position: Position;

    /// Total number of elements (rows across all sections in sectioned
    /// mode).
    fn total_len(&self) -> usize;

    /// True when the snapshot holds no elements; such snapshots take the
    /// `[Reload]` fast path on either side of a transition.
    fn is_effectively_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Ordered change events transforming `self` into `new`.
    fn diff(&self, new: &Self) -> Vec<ChangeEvent<Self::Position>>;
}

impl<T: Eq + Clone + Send + Sync + 'static> Snapshot for Vec<T> {
    type Position = usize;

    fn total_len(&self) -> usize {
        self.len()
    }

    fn diff(&self, new: &Self) -> Vec<ChangeEvent<usize>> {
        diff_flat(self, new)
    }
}

impl<T: Eq + Clone + Send + Sync + 'static> Snapshot for Sections<T> {
    type Position = IndexPath;

    fn total_len(&self) -> usize {
        Sections::total_len(self)
    }

    fn diff(&self, new: &Self) -> Vec<ChangeEvent<IndexPath>> {
        diff_sections(self, new)
    }
}
