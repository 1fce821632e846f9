use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeymutexError {
    #[error("Failed to acquire lock on key '{0}': key is held by another caller")]
    LockWouldBlock(String),

    #[error("Failed to release lock on key '{0}': key is not currently held")]
    ReleaseNotHeld(String),
}

impl KeymutexError {
    pub fn lock_would_block(key: impl Into<String>) -> Self {
        KeymutexError::LockWouldBlock(key.into())
    }

    pub fn release_not_held(key: impl Into<String>) -> Self {
        KeymutexError::ReleaseNotHeld(key.into())
    }
}

pub type Result<T> = std::result::Result<T, KeymutexError>;
