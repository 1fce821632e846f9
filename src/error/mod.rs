mod types;

pub use types::{KeymutexError, Result};

// Re-export for convenience
pub use KeymutexError as Error;
