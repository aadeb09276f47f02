//! BucketStore: in-memory container tree with read and write transactions
//!
//! # Design Notes
//!
//! - **Snapshot reads**: the committed root is an `Arc<Bucket>`; a read
//!   transaction clones the `Arc` and sees that tree until it is dropped
//! - **Single writer**: write transactions are serialized by a mutex held
//!   for the whole lifetime of the transaction
//! - **Copy-on-write**: a write transaction works on its own copy of the
//!   root; nested buckets are only copied when first mutated
//! - **Atomic publish**: `commit()` swaps the new root in under the root
//!   lock; dropping a write transaction without committing discards it
//! - **Versioning**: the version counts commits that changed the tree and
//!   is bumped under the same lock, so a snapshot's version matches its root

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard, RwLock};
use tracing::debug;

use nestkv_core::Limits;

use crate::bucket::{Bucket, BucketStats};

/// In-memory nested container store
#[derive(Debug)]
pub struct BucketStore {
    /// Last committed tree
    root: RwLock<Arc<Bucket>>,
    /// Held by the active write transaction
    writer: Mutex<()>,
    limits: Limits,
    /// Number of commits so far
    version: AtomicU64,
}

impl BucketStore {
    /// Create an empty store with default limits
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create an empty store enforcing `limits`
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            root: RwLock::new(Arc::new(Bucket::root(limits))),
            writer: Mutex::new(()),
            limits,
            version: AtomicU64::new(0),
        }
    }

    /// Limits enforced by this store
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Number of commits that changed the tree
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Start a read transaction on the last committed tree
    pub fn begin_read(&self) -> ReadTxn {
        // `publish` bumps the version under the write lock
        let root = self.root.read();
        ReadTxn {
            root: Arc::clone(&*root),
            version: self.version(),
        }
    }

    /// Start a write transaction
    ///
    /// Blocks while another write transaction is active.
    pub fn begin_write(&self) -> WriteTxn<'_> {
        let guard = self.writer.lock();
        let root = Bucket::clone(&self.root.read());
        WriteTxn {
            store: self,
            _writer: guard,
            root,
        }
    }

    /// Counts for the last committed tree
    pub fn stats(&self) -> BucketStats {
        self.root.read().stats()
    }

    /// Swap in `root` unless it equals the committed tree
    ///
    /// Untouched nested buckets still share their `Arc` with the committed
    /// tree, so the comparison stops at pointer equality for them.
    fn publish(&self, root: Bucket) -> Option<u64> {
        let mut current = self.root.write();
        if **current == root {
            return None;
        }
        *current = Arc::new(root);
        Some(self.version.fetch_add(1, Ordering::AcqRel) + 1)
    }
}

impl Default for BucketStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read transaction: an immutable snapshot of the committed tree
#[derive(Debug, Clone)]
pub struct ReadTxn {
    root: Arc<Bucket>,
    version: u64,
}

impl ReadTxn {
    /// Root bucket of the snapshot
    pub fn root(&self) -> &Bucket {
        &self.root
    }

    /// Store version the snapshot was taken at
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Write transaction with exclusive mutation rights
///
/// Changes become visible to new read transactions only after
/// [`commit`](WriteTxn::commit).
#[derive(Debug)]
pub struct WriteTxn<'a> {
    store: &'a BucketStore,
    _writer: MutexGuard<'a, ()>,
    root: Bucket,
}

impl<'a> WriteTxn<'a> {
    /// Root bucket as seen by this transaction
    pub fn root(&self) -> &Bucket {
        &self.root
    }

    /// Root bucket for mutation
    pub fn root_mut(&mut self) -> &mut Bucket {
        &mut self.root
    }

    /// Publish all changes, returning the store version
    ///
    /// A transaction that leaves the tree unchanged publishes nothing and
    /// does not bump the version.
    pub fn commit(self) -> u64 {
        match self.store.publish(self.root) {
            Some(version) => {
                debug!(target: "nestkv::storage", version, "Committed write transaction");
                version
            }
            None => {
                let version = self.store.version();
                debug!(target: "nestkv::storage", version, "Write transaction made no changes");
                version
            }
        }
    }

    /// Discard all changes
    pub fn rollback(self) {
        debug!(
            target: "nestkv::storage",
            version = self.store.version(),
            "Rolled back write transaction"
        );
    }
}
