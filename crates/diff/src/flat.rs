//! Diff for flat snapshots.

use crate::matcher::MatchIndex;
use ripple_core::ChangeEvent;

/// Computes the ordered change events transforming `old` into `new`.
///
/// If either snapshot is empty the result is the single event `[Reload]`:
/// the common "initial load" and "clear all" transitions would otherwise
/// produce one event per element. Every other transition is bracketed
/// `Begin .. End`.
///
/// Elements correspond across snapshots iff they compare equal; when the
/// same value occurs more than once, old occurrences are matched in
/// old-position order against the earliest remaining new position.
pub fn diff_flat<T: Eq>(old: &[T], new: &[T]) -> Vec<ChangeEvent<usize>> {
    if old.is_empty() || new.is_empty() {
        return vec![ChangeEvent::Reload];
    }

    let mut events = vec![ChangeEvent::Begin];
    let mut index = MatchIndex::new(new.iter().enumerate().collect());

    for (old_pos, element) in old.iter().enumerate() {
        match index.take_match(&element) {
            Some(new_pos) if new_pos != old_pos => {
                events.push(ChangeEvent::moved(old_pos, new_pos));
            }
            Some(_) => {}
            None => events.push(ChangeEvent::Deleted(old_pos)),
        }
    }

    for (new_pos, _) in index.into_unmatched() {
        events.push(ChangeEvent::Added(new_pos));
    }

    events.push(ChangeEvent::End);
    events
}
