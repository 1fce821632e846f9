use crate::registry::key_lock::KeyLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Holds a named lock until dropped.
///
/// Returned by [`LockRegistry::lock`](crate::LockRegistry::lock) and
/// [`LockRegistry::try_lock`](crate::LockRegistry::try_lock). The guard keeps
/// the per-key lock alive on its own, so it may be sent to and dropped on a
/// different thread than the one that acquired it.
#[derive(Debug)]
pub struct KeyGuard {
    key: String,
    lock: Arc<KeyLock>,
}

impl KeyGuard {
    pub(crate) fn new(key: String, lock: Arc<KeyLock>) -> Self {
        KeyGuard { key, lock }
    }

    /// Get the key this guard holds
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for KeyGuard {
    fn drop(&mut self) {
        if self.lock.release() {
            debug!("Lock released: {}", self.key);
        } else {
            // Someone released the key out from under the guard
            warn!(
                "Guard dropped for key '{}' but the lock was not held",
                self.key
            );
        }
    }
}
