use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/** process-wide cooperative cancellation flag.
Created before a search starts, polled once per solver loop iteration, never
reset mid-run. Tripping it makes every solver stop expanding frames and
return its current incumbent (anytime behavior). Clones share the same flag
and the handle can cross thread boundaries. */
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
}

impl Cancellation {
    /// creates a fresh, untripped flag
    pub fn new() -> Self {
        Self { flag: Arc::new(AtomicBool::new(false)) }
    }

    /// trips the flag; solvers observe it within one bound/split step
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// returns if the search should stop
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip() {
        let cancel = Cancellation::new();
        assert!(!cancel.is_cancelled());
        let shared = cancel.clone();
        shared.cancel();
        assert!(cancel.is_cancelled());
    }
}
