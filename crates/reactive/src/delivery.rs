//! Delivery context abstraction.
//!
//! Observer callbacks run on a designated execution context — for a UI
//! host, the thread that owns the widgets. The engine only requires that
//! delivery is synchronous: the mutation worker blocks until the context
//! has run the closure to completion, which is what guarantees that the
//! events of one transition are fully delivered before the next mutation
//! job starts.

/// An execution context for observer callbacks.
pub trait DeliveryContext: Send + Sync {
    /// Runs `f` on the context, returning only once it has finished.
    ///
    /// A UI host typically implements this by posting `f` to its main
    /// thread and blocking on completion.
    fn run_sync(&self, f: Box<dyn FnOnce() + Send>);
}

/// Runs callbacks inline on the calling thread (the mutation worker).
///
/// This is the default context. It satisfies the ordering guarantee
/// trivially; hosts that need callbacks on a particular thread supply
/// their own [`DeliveryContext`].
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineContext;

impl DeliveryContext for InlineContext {
    fn run_sync(&self, f: Box<dyn FnOnce() + Send>) {
        f();
    }
}
