//! Consumable position index used by the matching pass.

/// An index of `(position, element)` pairs for the new snapshot, consumed
/// as correspondences are found.
///
/// `take_match` scans the remaining entries in position order and removes
/// the first whose element equals the probe, so every new element
/// participates in at most one correspondence. Combined with the caller
/// probing old elements in old-position order, this fixes the duplicate
/// tie-break: the earliest remaining new position wins.
pub(crate) struct MatchIndex<P, E> {
    entries: Vec<(P, E)>,
}

impl<P: Copy, E: Eq> MatchIndex<P, E> {
    pub(crate) fn new(entries: Vec<(P, E)>) -> Self {
        Self { entries }
    }

    /// Removes and returns the position of the first remaining entry equal
    /// to `probe`, or `None` when no entry matches.
    pub(crate) fn take_match(&mut self, probe: &E) -> Option<P> {
        let found = self.entries.iter().position(|(_, element)| element == probe)?;
        Some(self.entries.remove(found).0)
    }

    /// The entries never matched, still in position order.
    pub(crate) fn into_unmatched(self) -> Vec<(P, E)> {
        self.entries
    }
}
