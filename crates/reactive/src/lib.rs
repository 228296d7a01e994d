//! Ripple Reactive - observable collections with diff-based change
//! notification.
//!
//! This crate is the live half of Ripple. It wraps the diff engine in a
//! pipeline suitable for feeding incremental updates to a presentation
//! layer:
//!
//! - `ObservableList` / `ObservableSections`: the host-facing facades
//! - a snapshot store with concurrent reads and atomic wholesale writes
//! - a serialized mutation worker (FIFO, max concurrency 1, bulk
//!   cancellation of not-yet-started replacements)
//! - weakly-held observer subscriptions with handle-based removal
//! - a pluggable delivery context for running callbacks on a host-owned
//!   thread
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ripple_reactive::{ChangeEvent, ObservableList};
//!
//! let list = ObservableList::new();
//! let observer = Arc::new(|event: &ChangeEvent<usize>| match event {
//!     ChangeEvent::Begin => { /* begin batched updates */ }
//!     ChangeEvent::Added(pos) => { /* insert row */ }
//!     ChangeEvent::Moved { from, to } => { /* move row */ }
//!     ChangeEvent::Deleted(pos) => { /* delete row */ }
//!     ChangeEvent::End => { /* end batched updates */ }
//!     ChangeEvent::Reload => { /* reload everything */ }
//!     _ => {}
//! });
//! let handle = list.subscribe(&observer);
//! list.replace(vec![1, 2, 3]);
//! ```

mod delivery;
mod engine;
mod list;
mod queue;
mod store;
mod subscription;

pub use delivery::{DeliveryContext, InlineContext};
pub use list::{ObservableList, ObservableSections};
pub use subscription::{ChangeObserver, SubscriptionId};

// Re-export commonly used types from dependencies
pub use ripple_core::{ChangeEvent, Error, IndexPath, Position, Result, SectionRange, Sections};
pub use ripple_diff::Snapshot;
