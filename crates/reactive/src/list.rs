//! Observable collection facades.

use crate::delivery::{DeliveryContext, InlineContext};
use crate::engine::ChangeEngine;
use crate::subscription::{ChangeObserver, SubscriptionId};
use ripple_core::{Error, IndexPath, Result, Sections};
use std::sync::Arc;

/// An observable flat collection.
///
/// The collection is replaced wholesale with [`replace`](Self::replace);
/// each replacement runs on a dedicated background worker that swaps the
/// snapshot, diffs it against the previous one, and replays the ordered
/// change events to every subscribed observer on the delivery context.
/// Reads are concurrent and never blocked by other reads.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use ripple_reactive::{ChangeEvent, ObservableList};
///
/// let list = ObservableList::new();
/// let observer = Arc::new(|event: &ChangeEvent<usize>| {
///     println!("{event:?}");
/// });
/// let handle = list.subscribe(&observer);
///
/// list.replace(vec![1, 2, 3]);      // delivered as [Reload]
/// list.replace(vec![3, 1, 4]);      // delivered as Begin .. End
/// list.unsubscribe(handle);
/// ```
pub struct ObservableList<T: Eq + Clone + Send + Sync + 'static> {
    engine: ChangeEngine<Vec<T>>,
}

impl<T: Eq + Clone + Send + Sync + 'static> ObservableList<T> {
    /// Creates an empty list delivering events inline on the worker.
    pub fn new() -> Self {
        Self::with_delivery(Arc::new(InlineContext))
    }

    /// Creates an empty list delivering events on `delivery`.
    pub fn with_delivery(delivery: Arc<dyn DeliveryContext>) -> Self {
        Self {
            engine: ChangeEngine::new(Vec::new(), delivery),
        }
    }

    /// A consistent point-in-time copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.engine.snapshot()
    }

    /// Number of elements in the current snapshot.
    pub fn len(&self) -> usize {
        self.engine.snapshot().len()
    }

    /// True when the current snapshot holds no elements.
    pub fn is_empty(&self) -> bool {
        self.engine.snapshot().is_empty()
    }

    /// The element at `index` in the current snapshot.
    pub fn get(&self, index: usize) -> Result<T> {
        let snapshot = self.engine.snapshot();
        snapshot
            .get(index)
            .cloned()
            .ok_or_else(|| Error::index_out_of_bounds(index, snapshot.len()))
    }

    /// Iterates a point-in-time copy of the contents.
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.snapshot().into_iter()
    }

    /// Enqueues a wholesale replacement of the contents.
    ///
    /// Replacements execute one at a time in submission order; observers
    /// see the complete event sequence of each transition before the next
    /// one begins.
    pub fn replace(&self, new: Vec<T>) {
        self.engine.replace(new);
    }

    /// Cancels every replacement that has not started executing.
    pub fn cancel_pending(&self) {
        self.engine.cancel_pending();
    }

    /// Registers an observer without taking ownership of it.
    ///
    /// The engine holds only a weak reference: when the host drops its
    /// `Arc`, delivery to this observer silently stops.
    pub fn subscribe<O>(&self, observer: &Arc<O>) -> SubscriptionId
    where
        O: ChangeObserver<usize> + 'static,
    {
        let observer: Arc<dyn ChangeObserver<usize>> = Arc::clone(observer) as _;
        self.engine.subscribe(&observer)
    }

    /// Removes a subscription by handle.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.engine.unsubscribe(id)
    }
}

impl<T: Eq + Clone + Send + Sync + 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An observable sectioned collection (sections of rows).
///
/// Identical pipeline to [`ObservableList`], with positions expressed as
/// [`IndexPath`] and section-level events for tail growth and shrink.
/// All positional access is checked; out-of-range sections or rows are
/// errors, never silently produced defaults.
pub struct ObservableSections<T: Eq + Clone + Send + Sync + 'static> {
    engine: ChangeEngine<Sections<T>>,
}

impl<T: Eq + Clone + Send + Sync + 'static> ObservableSections<T> {
    /// Creates an empty collection delivering events inline on the
    /// worker.
    pub fn new() -> Self {
        Self::with_delivery(Arc::new(InlineContext))
    }

    /// Creates an empty collection delivering events on `delivery`.
    pub fn with_delivery(delivery: Arc<dyn DeliveryContext>) -> Self {
        Self {
            engine: ChangeEngine::new(Sections::new(), delivery),
        }
    }

    /// A consistent point-in-time copy of the current contents.
    pub fn snapshot(&self) -> Sections<T> {
        self.engine.snapshot()
    }

    /// Number of sections in the current snapshot.
    pub fn section_count(&self) -> usize {
        self.engine.snapshot().section_count()
    }

    /// Total number of rows across all sections.
    pub fn total_len(&self) -> usize {
        self.engine.snapshot().total_len()
    }

    /// True when the current snapshot holds no rows.
    pub fn is_empty(&self) -> bool {
        self.engine.snapshot().is_empty()
    }

    /// The rows of one section of the current snapshot.
    pub fn section(&self, section: usize) -> Result<Vec<T>> {
        self.engine
            .snapshot()
            .section(section)
            .map(|rows| rows.to_vec())
    }

    /// The row at `path` in the current snapshot.
    pub fn get(&self, path: IndexPath) -> Result<T> {
        self.engine.snapshot().get(path).cloned()
    }

    /// The first row position of the current snapshot.
    pub fn start_path(&self) -> IndexPath {
        self.engine.snapshot().start_path()
    }

    /// One past the last row position of the current snapshot.
    pub fn end_path(&self) -> IndexPath {
        self.engine.snapshot().end_path()
    }

    /// The position after `path` in section-major order, skipping empty
    /// sections.
    pub fn path_after(&self, path: IndexPath) -> Result<IndexPath> {
        self.engine.snapshot().path_after(path)
    }

    /// Iterates a point-in-time copy of all rows with their paths, in
    /// section-major order.
    pub fn iter_rows(&self) -> std::vec::IntoIter<(IndexPath, T)> {
        self.engine
            .snapshot()
            .rows()
            .map(|(path, value)| (path, value.clone()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Enqueues a wholesale replacement of the contents.
    pub fn replace(&self, new: Sections<T>) {
        self.engine.replace(new);
    }

    /// Cancels every replacement that has not started executing.
    pub fn cancel_pending(&self) {
        self.engine.cancel_pending();
    }

    /// Registers an observer without taking ownership of it.
    pub fn subscribe<O>(&self, observer: &Arc<O>) -> SubscriptionId
    where
        O: ChangeObserver<IndexPath> + 'static,
    {
        let observer: Arc<dyn ChangeObserver<IndexPath>> = Arc::clone(observer) as _;
        self.engine.subscribe(&observer)
    }

    /// Removes a subscription by handle.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.engine.unsubscribe(id)
    }
}

impl<T: Eq + Clone + Send + Sync + 'static> Default for ObservableSections<T> {
    fn default() -> Self {
        Self::new()
    }
}
