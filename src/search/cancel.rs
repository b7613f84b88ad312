use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative stop flag shared between a caller and a running solve.
/// Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self { Self::default() }

    /// Wraps an existing flag, e.g. one owned by a UI thread.
    pub fn from_flag(flag: Arc<AtomicBool>) -> Self { Self { flag } }

    pub fn cancel(&self) { self.flag.store(true, Ordering::Relaxed); }

    pub fn is_cancelled(&self) -> bool { self.flag.load(Ordering::Relaxed) }

    pub fn reset(&self) { self.flag.store(false, Ordering::Relaxed); }
}
