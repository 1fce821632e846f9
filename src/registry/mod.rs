mod guard;
mod key_lock;
mod table;

pub use guard::KeyGuard;
pub use table::LockRegistry;
