//! Diff for sectioned snapshots.

use crate::matcher::MatchIndex;
use ripple_core::{ChangeEvent, IndexPath, SectionRange, Sections};

/// Computes the ordered change events transforming `old` into `new`.
///
/// Section counts only ever grow or shrink at the tail in this model, so
/// a count change produces a single `SectionsAdded` or `SectionsDeleted`
/// event covering the tail range. Rows are then matched exactly as in
/// [`diff_flat`](crate::diff_flat) over the flattened `(path, element)`
/// sequences, with one refinement: a correspondence with an endpoint
/// inside the changed-section range degrades to a plain `Added` or
/// `Deleted` (its other home is created or removed wholesale, so no move
/// is meaningful), and unmatched elements inside the changed range are
/// suppressed entirely — the section-level event already implies them.
///
/// If either snapshot holds zero rows in total, the result is `[Reload]`.
pub fn diff_sections<T: Eq>(old: &Sections<T>, new: &Sections<T>) -> Vec<ChangeEvent<IndexPath>> {
    if old.is_empty() || new.is_empty() {
        return vec![ChangeEvent::Reload];
    }

    let mut events = vec![ChangeEvent::Begin];

    let old_count = old.section_count();
    let new_count = new.section_count();
    let changed = if old_count < new_count {
        let range = SectionRange::new(old_count, new_count);
        events.push(ChangeEvent::SectionsAdded(range.clone()));
        range
    } else if new_count < old_count {
        let range = SectionRange::new(new_count, old_count);
        events.push(ChangeEvent::SectionsDeleted(range.clone()));
        range
    } else {
        SectionRange::empty()
    };

    let mut index = MatchIndex::new(new.rows().collect());

    for (old_path, element) in old.rows() {
        match index.take_match(&element) {
            Some(new_path) => {
                if new_path == old_path {
                    continue;
                }
                if !changed.contains(new_path.section) && !changed.contains(old_path.section) {
                    events.push(ChangeEvent::moved(old_path, new_path));
                } else if changed.contains(old_path.section) {
                    // Its old section disappears wholesale; only the
                    // insertion side is reportable.
                    events.push(ChangeEvent::Added(new_path));
                } else {
                    events.push(ChangeEvent::Deleted(old_path));
                }
            }
            None => {
                if !changed.contains(old_path.section) {
                    events.push(ChangeEvent::Deleted(old_path));
                }
            }
        }
    }

    for (new_path, _) in index.into_unmatched() {
        if !changed.contains(new_path.section) {
            events.push(ChangeEvent::Added(new_path));
        }
    }

    events.push(ChangeEvent::End);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections<T>(data: Vec<Vec<T>>) -> Sections<T> {
        Sections::from(data)
    }

    fn path(section: usize, row: usize) -> IndexPath {
        IndexPath::new(section, row)
    }

    #[test]
    fn test_identical_snapshots_produce_empty_bracket() {
        let a = sections(vec![vec![1, 2], vec![3]]);
        let events = diff_sections(&a, &a.clone());
        assert_eq!(events, vec![ChangeEvent::Begin, ChangeEvent::End]);
    }

    #[test]
    fn test_zero_total_rows_is_reload() {
        let empty = sections(vec![vec![], vec![]]);
        let full = sections(vec![vec![1]]);
        assert_eq!(diff_sections(&empty, &full), vec![ChangeEvent::Reload]);
        assert_eq!(diff_sections(&full, &empty), vec![ChangeEvent::Reload]);
    }

    #[test]
    fn test_tail_section_added_without_row_events() {
        // [[1,2],[3]] -> [[1,2],[3],[4]]: one section event, the new
        // section's rows are implied by it.
        let old = sections(vec![vec![1, 2], vec![3]]);
        let new = sections(vec![vec![1, 2], vec![3], vec![4]]);
        let events = diff_sections(&old, &new);
        assert_eq!(
            events,
            vec![
                ChangeEvent::Begin,
                ChangeEvent::SectionsAdded(SectionRange::new(2, 3)),
                ChangeEvent::End,
            ]
        );
    }

    #[test]
    fn test_tail_section_deleted_without_row_events() {
        let old = sections(vec![vec![1], vec![2]]);
        let new = sections(vec![vec![1]]);
        let events = diff_sections(&old, &new);
        assert_eq!(
            events,
            vec![
                ChangeEvent::Begin,
                ChangeEvent::SectionsDeleted(SectionRange::new(1, 2)),
                ChangeEvent::End,
            ]
        );
    }

    #[test]
    fn test_move_across_surviving_sections() {
        let old = sections(vec![vec![1, 2], vec![3]]);
        let new = sections(vec![vec![2], vec![3, 1]]);
        let events = diff_sections(&old, &new);
        assert_eq!(
            events,
            vec![
                ChangeEvent::Begin,
                ChangeEvent::moved(path(0, 0), path(1, 1)),
                ChangeEvent::moved(path(0, 1), path(0, 0)),
                ChangeEvent::End,
            ]
        );
    }

    #[test]
    fn test_match_escaping_deleted_section_is_added() {
        // 2 lives in the section being deleted but survives in section 0,
        // so its reappearance is an insertion, not a move.
        let old = sections(vec![vec![1], vec![2]]);
        let new = sections(vec![vec![1, 2]]);
        let events = diff_sections(&old, &new);
        assert_eq!(
            events,
            vec![
                ChangeEvent::Begin,
                ChangeEvent::SectionsDeleted(SectionRange::new(1, 2)),
                ChangeEvent::Added(path(0, 1)),
                ChangeEvent::End,
            ]
        );
    }

    #[test]
    fn test_match_entering_added_section_is_deleted() {
        let old = sections(vec![vec![1, 2]]);
        let new = sections(vec![vec![1], vec![2]]);
        let events = diff_sections(&old, &new);
        assert_eq!(
            events,
            vec![
                ChangeEvent::Begin,
                ChangeEvent::SectionsAdded(SectionRange::new(1, 2)),
                ChangeEvent::Deleted(path(0, 1)),
                ChangeEvent::End,
            ]
        );
    }

    #[test]
    fn test_unmatched_rows_inside_changed_range_are_suppressed() {
        let old = sections(vec![vec![1], vec![9, 9]]);
        let new = sections(vec![vec![1]]);
        let events = diff_sections(&old, &new);
        assert_eq!(
            events,
            vec![
                ChangeEvent::Begin,
                ChangeEvent::SectionsDeleted(SectionRange::new(1, 2)),
                ChangeEvent::End,
            ]
        );
    }

    #[test]
    fn test_row_churn_within_equal_section_count() {
        let old = sections(vec![vec![1, 2], vec![3]]);
        let new = sections(vec![vec![1], vec![3, 4]]);
        let events = diff_sections(&old, &new);
        assert_eq!(
            events,
            vec![
                ChangeEvent::Begin,
                ChangeEvent::Deleted(path(0, 1)),
                ChangeEvent::Added(path(1, 1)),
                ChangeEvent::End,
            ]
        );
    }

    #[test]
    fn test_empty_interior_section_is_preserved() {
        let old = sections(vec![vec![1], vec![], vec![2]]);
        let new = sections(vec![vec![1], vec![], vec![2]]);
        let events = diff_sections(&old, &new);
        assert_eq!(events, vec![ChangeEvent::Begin, ChangeEvent::End]);
    }
}
