use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative stop signal shared by every task in a run.
///
/// Producers poll it once per production cycle; consumers re-check it on
/// every condvar wakeup. The orchestrator is the only writer and sets it
/// exactly once, following up with `Warehouse::wake_all` so that consumers
/// blocked on an empty buffer observe the flag instead of waiting forever.
#[derive(Debug, Default)]
pub struct ShutdownCoordinator {
    triggered: AtomicBool,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            triggered: AtomicBool::new(false),
        }
    }

    /// Marks the run as stopping. Callers that may have consumers parked on
    /// the warehouse condvar must broadcast a wake afterwards.
    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_untriggered() {
        let stop = ShutdownCoordinator::new();
        assert!(!stop.is_triggered());
    }

    #[test]
    fn test_trigger_is_sticky() {
        let stop = ShutdownCoordinator::new();
        stop.trigger();
        assert!(stop.is_triggered());
        stop.trigger();
        assert!(stop.is_triggered());
    }
}
