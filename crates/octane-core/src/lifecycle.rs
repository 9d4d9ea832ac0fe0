//! Host lifecycle signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-way flag raised when the hosting IDE starts tearing down.
///
/// There is no way to lower it again. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_shared_and_one_way() {
        let flag = ShutdownFlag::new();
        let clone = flag.clone();
        assert!(!clone.is_set());

        flag.mark();
        flag.mark();
        assert!(clone.is_set());
    }
}
