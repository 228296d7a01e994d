//! Concurrency-safe holder of the current snapshot.

use std::sync::RwLock;

/// Holds the engine's current snapshot behind a reader/writer lock.
///
/// `read` returns a full clone so callers never hold the lock while they
/// consume the snapshot; `write` swaps the value atomically. Any number
/// of readers proceed concurrently; a write excludes everything for the
/// duration of the swap only — diffing happens afterwards against the
/// captured copies and never holds this lock.
pub(crate) struct SnapshotStore<S> {
    current: RwLock<S>,
}

impl<S: Clone> SnapshotStore<S> {
    pub(crate) fn new(initial: S) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// A consistent full copy of the current snapshot.
    pub(crate) fn read(&self) -> S {
        // A poisoned lock still holds a fully formed snapshot: the write
        // path is a single assignment of an already-built value.
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Installs `new` as the current snapshot.
    pub(crate) fn write(&self, new: S) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = new;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_read_returns_copy() {
        let store = SnapshotStore::new(vec![1, 2]);
        let mut copy = store.read();
        copy.push(3);
        assert_eq!(store.read(), vec![1, 2]);
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let store = SnapshotStore::new(vec![1]);
        store.write(vec![7, 8]);
        assert_eq!(store.read(), vec![7, 8]);
    }

    #[test]
    fn test_concurrent_readers_see_whole_snapshots() {
        // Snapshots are constant-valued vectors, so a torn read would
        // show up as a mixed vector.
        let store = Arc::new(SnapshotStore::new(vec![0u8; 64]));
        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for k in 1..=50u8 {
                    store.write(vec![k; 64]);
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let snapshot = store.read();
                        assert!(snapshot.windows(2).all(|w| w[0] == w[1]));
                    }
                })
            })
            .collect();
        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
