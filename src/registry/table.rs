use crate::error::{KeymutexError, Result};
use crate::registry::guard::KeyGuard;
use crate::registry::key_lock::KeyLock;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry of named locks, created lazily on first acquisition.
///
/// The table mutex guards only lookup and insertion of per-key locks; it is
/// never held while a caller blocks on a key. Entries persist for the
/// lifetime of the registry, so the table grows with the number of distinct
/// keys ever seen.
#[derive(Debug, Default)]
pub struct LockRegistry {
    table: Mutex<HashMap<String, Arc<KeyLock>>>,
}

impl LockRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the lock for `key`, creating it on first access.
    ///
    /// Lookup-or-insert happens as one step under the table lock, so
    /// concurrent first acquisitions of the same key all land on a single
    /// lock instance.
    fn key_lock(&self, key: &str) -> Arc<KeyLock> {
        let mut table = self.table.lock();
        Arc::clone(table.entry(key.to_owned()).or_default())
    }

    fn acquire_key_lock(&self, key: &str) -> Arc<KeyLock> {
        debug!("Acquiring lock: {}", key);
        let lock = self.key_lock(key);
        lock.acquire();
        debug!("Lock acquired: {}", key);
        lock
    }

    /// Acquire the lock for `key`, blocking until it is free.
    ///
    /// Pair with a later [`release`](Self::release) for the same key, or use
    /// [`lock`](Self::lock) for scoped release.
    pub fn acquire(&self, key: &str) {
        self.acquire_key_lock(key);
    }

    /// Acquire the lock for `key` without blocking
    pub fn try_acquire(&self, key: &str) -> Result<()> {
        let lock = self.key_lock(key);
        if lock.try_acquire() {
            debug!("Lock acquired: {}", key);
            Ok(())
        } else {
            Err(KeymutexError::lock_would_block(key))
        }
    }

    /// Release the lock for `key` and wake one blocked waiter.
    ///
    /// Releasing a key that was never registered is a no-op. Releasing a
    /// registered key that is not currently held is caller misuse and is
    /// reported as [`KeymutexError::ReleaseNotHeld`].
    pub fn release(&self, key: &str) -> Result<()> {
        let lock = self.table.lock().get(key).cloned();

        let lock = match lock {
            Some(lock) => lock,
            None => {
                // Lock not found, do nothing
                debug!("Release ignored, key never registered: {}", key);
                return Ok(());
            }
        };

        if lock.release() {
            debug!("Lock released: {}", key);
            Ok(())
        } else {
            warn!("Release of key '{}' which is not held", key);
            Err(KeymutexError::release_not_held(key))
        }
    }

    /// Acquire `key` and return a guard that releases it on drop
    pub fn lock(&self, key: &str) -> KeyGuard {
        let lock = self.acquire_key_lock(key);
        KeyGuard::new(key.to_owned(), lock)
    }

    /// Acquire `key` without blocking, returning a guard on success
    pub fn try_lock(&self, key: &str) -> Result<KeyGuard> {
        let lock = self.key_lock(key);
        if lock.try_acquire() {
            debug!("Lock acquired: {}", key);
            Ok(KeyGuard::new(key.to_owned(), lock))
        } else {
            Err(KeymutexError::lock_would_block(key))
        }
    }

    /// Number of distinct keys ever registered
    pub fn key_count(&self) -> usize {
        self.table.lock().len()
    }

    /// Whether any key has been registered yet
    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }

    /// Whether `key` is currently held by some caller
    pub fn is_held(&self, key: &str) -> bool {
        self.table
            .lock()
            .get(key)
            .is_some_and(|lock| lock.is_held())
    }
}
