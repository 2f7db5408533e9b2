use std::time::Duration;

/// Timed suspension used for producer ticks, truck transit and the overall
/// run duration. Injected so tests can drive simulations without wall-clock
/// sleeps. No lock is ever held across a sleep.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Wall-clock sleeper used outside tests.
#[derive(Debug, Default)]
pub struct SystemSleeper;

impl Sleeper for SystemSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Sleeper where every delay completes immediately. Keeps test runs fast
/// and deterministic.
#[derive(Debug, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_instant_sleeper_does_not_block() {
        let start = Instant::now();
        InstantSleeper.sleep(Duration::from_secs(60));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
