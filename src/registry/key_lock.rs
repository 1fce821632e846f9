use parking_lot::{Condvar, Mutex};

/// Per-key exclusive lock with an explicit held/free bit.
///
/// The bit makes misuse observable: releasing a lock that is already free is
/// reported to the caller instead of silently corrupting waiter state.
#[derive(Debug, Default)]
pub(crate) struct KeyLock {
    held: Mutex<bool>,
    freed: Condvar,
}

impl KeyLock {
    /// Block until the lock is free, then take it
    pub(crate) fn acquire(&self) {
        let mut held = self.held.lock();
        while *held {
            self.freed.wait(&mut held);
        }
        *held = true;
    }

    /// Take the lock only if it is free right now
    pub(crate) fn try_acquire(&self) -> bool {
        let mut held = self.held.lock();
        if *held {
            false
        } else {
            *held = true;
            true
        }
    }

    /// Free the lock and wake one blocked waiter.
    ///
    /// Returns `false` if the lock was not held.
    pub(crate) fn release(&self) -> bool {
        let mut held = self.held.lock();
        if !*held {
            return false;
        }
        *held = false;
        drop(held);
        self.freed.notify_one();
        true
    }

    pub(crate) fn is_held(&self) -> bool {
        *self.held.lock()
    }
}
