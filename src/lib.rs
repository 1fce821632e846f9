//! Named lock registry: mutual exclusion keyed by runtime strings

pub mod error;
pub mod registry;

pub use error::{KeymutexError, Result};
pub use registry::{KeyGuard, LockRegistry};
