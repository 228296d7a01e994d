//! Serialized mutation worker.
//!
//! One dedicated thread drains submitted jobs in FIFO order, one at a
//! time. Each job carries a cancellation flag: `cancel_pending` flips the
//! flag of every job that has not started yet, and a job checks its flag
//! exactly once, immediately before running — a job that already started
//! always completes. Cancellation is best-effort and non-preemptive.

use log::trace;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, Weak};
use std::thread::{self, JoinHandle};

struct Job {
    cancelled: Arc<AtomicBool>,
    run: Box<dyn FnOnce() + Send>,
}

pub(crate) struct MutationQueue {
    sender: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
    /// Cancellation flags of jobs that may not have started yet. Weak so
    /// a completed job's flag drops out on its own; pruned on submit.
    pending: Mutex<Vec<Weak<AtomicBool>>>,
}

impl MutationQueue {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker = thread::spawn(move || {
            for job in receiver {
                if job.cancelled.load(Ordering::Acquire) {
                    trace!("skipping cancelled mutation job");
                    continue;
                }
                (job.run)();
            }
        });
        Self {
            sender: Some(sender),
            worker: Some(worker),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Enqueues `run` behind every previously submitted job.
    pub(crate) fn submit(&self, run: Box<dyn FnOnce() + Send>) {
        let cancelled = Arc::new(AtomicBool::new(false));
        {
            let mut pending = self
                .pending
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            pending.retain(|flag| flag.strong_count() > 0);
            pending.push(Arc::downgrade(&cancelled));
        }
        if let Some(sender) = &self.sender {
            // The worker outlives the sender, so this only fails during
            // teardown, where dropping the job is the right outcome.
            let _ = sender.send(Job { cancelled, run });
        }
    }

    /// Marks every not-yet-started job as cancelled.
    pub(crate) fn cancel_pending(&self) {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut cancelled = 0usize;
        for flag in pending.drain(..) {
            if let Some(flag) = flag.upgrade() {
                flag.store(true, Ordering::Release);
                cancelled += 1;
            }
        }
        trace!("cancelled {cancelled} pending mutation jobs");
    }
}

impl Drop for MutationQueue {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain what remains and
        // exit; join so no job outlives the queue.
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
