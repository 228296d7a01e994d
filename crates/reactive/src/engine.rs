//! The change engine: snapshot store + mutation queue + notification.
//!
//! A mutation job runs the fixed pipeline: check cancellation, capture
//! the old snapshot, swap in the new one, diff, deliver. Delivery blocks
//! the job until every event has reached every live observer, so the
//! observable event stream for mutation N is complete before mutation
//! N + 1 captures its old snapshot.

use crate::delivery::DeliveryContext;
use crate::queue::MutationQueue;
use crate::store::SnapshotStore;
use crate::subscription::{ChangeObserver, SubscriptionId, SubscriptionManager};
use log::{debug, trace};
use ripple_core::ChangeEvent;
use ripple_diff::Snapshot;
use std::sync::{Arc, Mutex};

struct Inner<S: Snapshot> {
    store: SnapshotStore<S>,
    subscriptions: Mutex<SubscriptionManager<S::Position>>,
    delivery: Arc<dyn DeliveryContext>,
}

impl<S: Snapshot> Inner<S> {
    fn deliver(&self, events: Vec<ChangeEvent<S::Position>>) {
        let observers = self
            .subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .live_observers();
        if observers.is_empty() {
            debug!("no live observers, dropping {} events", events.len());
            return;
        }
        trace!(
            "delivering {} events to {} observers",
            events.len(),
            observers.len()
        );
        self.delivery.run_sync(Box::new(move || {
            for event in &events {
                for observer in &observers {
                    observer.on_change(event);
                }
            }
        }));
    }
}

/// Generic engine shared by the flat and sectioned facades.
pub(crate) struct ChangeEngine<S: Snapshot> {
    inner: Arc<Inner<S>>,
    queue: MutationQueue,
}

impl<S: Snapshot> ChangeEngine<S> {
    pub(crate) fn new(initial: S, delivery: Arc<dyn DeliveryContext>) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: SnapshotStore::new(initial),
                subscriptions: Mutex::new(SubscriptionManager::new()),
                delivery,
            }),
            queue: MutationQueue::new(),
        }
    }

    pub(crate) fn snapshot(&self) -> S {
        self.inner.store.read()
    }

    /// Submits a wholesale replacement of the collection.
    pub(crate) fn replace(&self, new_snapshot: S) {
        let inner = Arc::clone(&self.inner);
        self.queue.submit(Box::new(move || {
            let old = inner.store.read();
            inner.store.write(new_snapshot.clone());
            let events = old.diff(&new_snapshot);
            inner.deliver(events);
        }));
    }

    pub(crate) fn cancel_pending(&self) {
        self.queue.cancel_pending();
    }

    pub(crate) fn subscribe(&self, observer: &Arc<dyn ChangeObserver<S::Position>>) -> SubscriptionId {
        self.inner
            .subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .subscribe(observer)
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner
            .subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .unsubscribe(id)
    }
}
