//! Ripple Diff - structural diff engine for flat and sectioned snapshots.
//!
//! Given an old and a new snapshot of an ordered collection, this crate
//! computes an ordered list of [`ChangeEvent`]s (insertions, deletions,
//! moves, section insertions/deletions) that a presentation layer can
//! replay as incremental updates.
//!
//! The matching scheme is greedy first-match by equality, O(n*m). It does
//! not compute a minimal edit script: UI consumers need *a* correct,
//! displayable edit sequence more than a shortest one, and duplicate
//! element values are expected to be rare.
//!
//! # Example
//!
//! ```rust
//! use ripple_diff::{diff_flat, ChangeEvent};
//!
//! let events = diff_flat(&[1, 2], &[2, 1]);
//! assert_eq!(
//!     events,
//!     vec![
//!         ChangeEvent::Begin,
//!         ChangeEvent::Moved { from: 0, to: 1 },
//!         ChangeEvent::Moved { from: 1, to: 0 },
//!         ChangeEvent::End,
//!     ]
//! );
//! ```

mod flat;
mod matcher;
mod sectioned;
mod snapshot;

pub use flat::diff_flat;
pub use sectioned::diff_sections;
pub use snapshot::Snapshot;

// Re-export commonly used types from dependencies
pub use ripple_core::{ChangeEvent, IndexPath, Position, SectionRange, Sections};
