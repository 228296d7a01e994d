//! Change events describing the transition between two snapshots.

use crate::position::{Position, SectionRange};

/// One unit of structural edit information.
///
/// The diff engine emits events in a fixed shape: either a bracketed
/// sequence `Begin, <edits...>, End`, or the single-element sequence
/// `[Reload]` when a transition crosses an empty snapshot and a wholesale
/// refresh is cheaper than per-element edits.
///
/// `Added` positions refer to the new snapshot, `Deleted` positions to the
/// old one, and `Moved` carries one of each. The section variants are only
/// produced in sectioned mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeEvent<P: Position> {
    /// Start of a bracketed update.
    Begin,
    /// Element inserted at a position in the new snapshot.
    Added(P),
    /// Element present in both snapshots at different positions.
    Moved { from: P, to: P },
    /// Element removed from a position in the old snapshot.
    Deleted(P),
    /// Sections appended at the tail of the snapshot.
    SectionsAdded(SectionRange),
    /// Sections removed from the tail of the snapshot.
    SectionsDeleted(SectionRange),
    /// End of a bracketed update.
    End,
    /// The transition crossed empty; consumers should refresh wholesale.
    Reload,
}

impl<P: Position> ChangeEvent<P> {
    /// Creates a move event.
    #[inline]
    pub fn moved(from: P, to: P) -> Self {
        ChangeEvent::Moved { from, to }
    }

    /// Returns true for events that describe an actual edit, as opposed
    /// to the `Begin`/`End` bracket or a `Reload` signal.
    #[inline]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ChangeEvent::Added(_)
                | ChangeEvent::Moved { .. }
                | ChangeEvent::Deleted(_)
                | ChangeEvent::SectionsAdded(_)
                | ChangeEvent::SectionsDeleted(_)
        )
    }
}
