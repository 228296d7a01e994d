//! Property-based tests for ripple-diff.
//!
//! The central law: replaying the emitted edit sequence against the old
//! snapshot (section events first, moves and deletes addressed in old
//! coordinates, adds addressed in new coordinates with payloads pulled
//! from the new snapshot, as a table view would from its data source)
//! reconstructs the new snapshot exactly.

use proptest::prelude::*;
use ripple_diff::{diff_flat, diff_sections, ChangeEvent, IndexPath, Sections};

/// Applies a flat event sequence to `old`, sourcing inserted payloads
/// from `new`. Panics on malformed sequences.
fn apply_flat(old: &[u8], new: &[u8], events: &[ChangeEvent<usize>]) -> Vec<u8> {
    if events == [ChangeEvent::Reload] {
        return new.to_vec();
    }
    assert_eq!(events.first(), Some(&ChangeEvent::Begin));
    assert_eq!(events.last(), Some(&ChangeEvent::End));

    let mut deleted = vec![false; old.len()];
    let mut moved_to = vec![None; old.len()];
    let mut result: Vec<Option<u8>> = vec![None; new.len()];

    for event in &events[1..events.len() - 1] {
        match event {
            ChangeEvent::Deleted(pos) => deleted[*pos] = true,
            ChangeEvent::Moved { from, to } => moved_to[*from] = Some(*to),
            ChangeEvent::Added(pos) => result[*pos] = Some(new[*pos]),
            other => panic!("unexpected event in flat sequence: {other:?}"),
        }
    }

    for (pos, value) in old.iter().enumerate() {
        if deleted[pos] {
            continue;
        }
        let target = moved_to[pos].unwrap_or(pos);
        assert!(result[target].is_none(), "slot {target} written twice");
        result[target] = Some(*value);
    }

    result
        .into_iter()
        .enumerate()
        .map(|(pos, slot)| slot.unwrap_or_else(|| panic!("slot {pos} never written")))
        .collect()
}

/// Applies a sectioned event sequence to `old`. Sections named by a
/// `SectionsAdded` event are filled wholesale from `new`, and rows of
/// `SectionsDeleted` sections vanish without per-row events, mirroring
/// how a table view treats section-level updates.
fn apply_sectioned(
    old: &Sections<u8>,
    new: &Sections<u8>,
    events: &[ChangeEvent<IndexPath>],
) -> Sections<u8> {
    if events == [ChangeEvent::Reload] {
        return new.clone();
    }
    assert_eq!(events.first(), Some(&ChangeEvent::Begin));
    assert_eq!(events.last(), Some(&ChangeEvent::End));

    let mut result: Vec<Vec<Option<u8>>> = new
        .as_slice()
        .iter()
        .map(|rows| vec![None; rows.len()])
        .collect();
    let mut deleted: Vec<IndexPath> = Vec::new();
    let mut moved: Vec<(IndexPath, IndexPath)> = Vec::new();
    let mut deleted_sections_seen = false;

    for event in &events[1..events.len() - 1] {
        match event {
            ChangeEvent::Deleted(path) => deleted.push(*path),
            ChangeEvent::Moved { from, to } => moved.push((*from, *to)),
            ChangeEvent::Added(path) => {
                result[path.section][path.row] = Some(*new.get(*path).unwrap());
            }
            ChangeEvent::SectionsAdded(range) => {
                assert_eq!(range.end(), new.section_count(), "adds must be at the tail");
                for section in range.iter() {
                    for (row, value) in new.section(section).unwrap().iter().enumerate() {
                        result[section][row] = Some(*value);
                    }
                }
            }
            ChangeEvent::SectionsDeleted(range) => {
                assert_eq!(range.end(), old.section_count(), "deletes must be at the tail");
                assert_eq!(range.start(), new.section_count());
                deleted_sections_seen = true;
            }
            other => panic!("unexpected event in sectioned sequence: {other:?}"),
        }
    }
    if old.section_count() > new.section_count() {
        assert!(deleted_sections_seen, "missing SectionsDeleted event");
    }

    for (path, value) in old.rows() {
        if deleted.contains(&path) {
            continue;
        }
        // Rows of deleted tail sections vanish with their section.
        if path.section >= new.section_count() {
            continue;
        }
        let target = moved
            .iter()
            .find(|(from, _)| *from == path)
            .map(|(_, to)| *to)
            .unwrap_or(path);
        let slot = &mut result[target.section][target.row];
        assert!(slot.is_none(), "slot {target} written twice");
        *slot = Some(*value);
    }

    Sections::from(
        result
            .into_iter()
            .map(|rows| {
                rows.into_iter()
                    .map(|slot| slot.expect("row never written"))
                    .collect()
            })
            .collect::<Vec<Vec<u8>>>(),
    )
}

fn flat_strategy() -> impl Strategy<Value = Vec<u8>> {
    // Narrow value range on purpose: duplicate elements must be common.
    prop::collection::vec(0u8..5, 0..8)
}

fn sectioned_strategy() -> impl Strategy<Value = Sections<u8>> {
    prop::collection::vec(prop::collection::vec(0u8..5, 0..4), 0..4).prop_map(Sections::from)
}

proptest! {
    /// Replaying the flat edit sequence reconstructs the new snapshot,
    /// duplicates included.
    #[test]
    fn flat_roundtrip(old in flat_strategy(), new in flat_strategy()) {
        let events = diff_flat(&old, &new);
        if old.is_empty() || new.is_empty() {
            prop_assert_eq!(events, vec![ChangeEvent::Reload]);
        } else {
            prop_assert_eq!(apply_flat(&old, &new, &events), new);
        }
    }

    /// A snapshot diffed against itself yields an empty bracket.
    #[test]
    fn flat_self_diff_is_empty_bracket(a in flat_strategy()) {
        prop_assume!(!a.is_empty());
        prop_assert_eq!(diff_flat(&a, &a), vec![ChangeEvent::Begin, ChangeEvent::End]);
    }

    /// Every matched element produces at most one event: never a
    /// Deleted + Added pair for the same value when the counts allow a
    /// correspondence.
    #[test]
    fn flat_distinct_elements_move_instead_of_churn(
        mut old in prop::collection::vec(0u8..=255, 1..8),
    ) {
        old.sort_unstable();
        old.dedup();
        let mut new = old.clone();
        new.rotate_left(1);
        let events = diff_flat(&old, &new);
        for event in &events {
            prop_assert!(
                !matches!(event, ChangeEvent::Added(_) | ChangeEvent::Deleted(_)),
                "distinct rotation must only move: {:?}",
                event
            );
        }
    }

    /// Replaying the sectioned edit sequence reconstructs the new
    /// snapshot, including tail section growth and shrink.
    #[test]
    fn sectioned_roundtrip(old in sectioned_strategy(), new in sectioned_strategy()) {
        let events = diff_sections(&old, &new);
        if old.is_empty() || new.is_empty() {
            prop_assert_eq!(events, vec![ChangeEvent::Reload]);
        } else {
            prop_assert_eq!(apply_sectioned(&old, &new, &events), new);
        }
    }

    /// Sectioned sequences are always bracketed or exactly `[Reload]`.
    #[test]
    fn sectioned_sequence_shape(old in sectioned_strategy(), new in sectioned_strategy()) {
        let events = diff_sections(&old, &new);
        if events.len() == 1 {
            prop_assert_eq!(&events[0], &ChangeEvent::Reload);
        } else {
            prop_assert_eq!(events.first(), Some(&ChangeEvent::Begin));
            prop_assert_eq!(events.last(), Some(&ChangeEvent::End));
            prop_assert!(events[1..events.len() - 1].iter().all(ChangeEvent::is_structural));
        }
    }
}
