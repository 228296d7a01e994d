//! Weak observer subscriptions with handle-based removal.

use hashbrown::HashMap;
use ripple_core::{ChangeEvent, Position};
use std::sync::{Arc, Weak};

/// Unique identifier for a subscription.
pub type SubscriptionId = u64;

/// Receives the change events of a transition, one call per event, in
/// order, on the engine's delivery context.
///
/// Implemented for closures, so `Arc::new(|event| { .. })` subscribes
/// directly.
pub trait ChangeObserver<P: Position>: Send + Sync {
    /// Called once per event.
    fn on_change(&self, event: &ChangeEvent<P>);
}

impl<P, F> ChangeObserver<P> for F
where
    P: Position,
    F: Fn(&ChangeEvent<P>) + Send + Sync,
{
    fn on_change(&self, event: &ChangeEvent<P>) {
        self(event)
    }
}

/// Tracks weakly-held observers keyed by subscription id.
///
/// The manager never owns an observer: the host keeps the `Arc`, and once
/// it drops the last one, delivery to that observer becomes a silent
/// no-op. Dead entries are pruned whenever the live list is assembled.
pub(crate) struct SubscriptionManager<P: Position> {
    observers: HashMap<SubscriptionId, Weak<dyn ChangeObserver<P>>>,
    next_id: SubscriptionId,
}

impl<P: Position> SubscriptionManager<P> {
    pub(crate) fn new() -> Self {
        Self {
            observers: HashMap::new(),
            next_id: 1,
        }
    }

    /// Registers an observer without taking ownership; returns the handle
    /// for [`unsubscribe`](Self::unsubscribe).
    pub(crate) fn subscribe(&mut self, observer: &Arc<dyn ChangeObserver<P>>) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.insert(id, Arc::downgrade(observer));
        id
    }

    /// Removes a subscription by handle.
    ///
    /// Returns true if the subscription was found and removed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Upgrades the live observers in subscription order, pruning entries
    /// whose observer has been dropped.
    pub(crate) fn live_observers(&mut self) -> Vec<Arc<dyn ChangeObserver<P>>> {
        self.observers.retain(|_, weak| weak.strong_count() > 0);
        let mut ids: Vec<_> = self.observers.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter()
            .filter_map(|id| self.observers.get(&id).and_then(Weak::upgrade))
            .collect()
    }

    /// Number of registered subscriptions, dead or alive.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}
