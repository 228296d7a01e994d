//! Ripple Core - positions, change events, and snapshot types for the
//! Ripple change-detection engine.
//!
//! This crate provides the foundational vocabulary shared by the diff
//! engine and the reactive layer:
//!
//! - `IndexPath`: a (section, row) position in a sectioned snapshot
//! - `SectionRange`: a contiguous run of section indices
//! - `ChangeEvent`: one unit of structural edit information
//! - `Sections`: a two-level snapshot with checked access and
//!   section-major iteration
//! - `Error`: precondition-violation errors (out-of-range access)
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{ChangeEvent, IndexPath, Sections};
//!
//! let snapshot = Sections::from(vec![vec![1, 2], vec![3]]);
//! assert_eq!(snapshot.section_count(), 2);
//! assert_eq!(snapshot.total_len(), 3);
//! assert_eq!(snapshot.get(IndexPath::new(1, 0)), Ok(&3));
//!
//! let event = ChangeEvent::Moved {
//!     from: IndexPath::new(0, 1),
//!     to: IndexPath::new(1, 0),
//! };
//! assert!(event.is_structural());
//! ```

mod error;
mod event;
mod position;
mod sections;

pub use error::{Error, Result};
pub use event::ChangeEvent;
pub use position::{IndexPath, Position, SectionRange};
pub use sections::Sections;
