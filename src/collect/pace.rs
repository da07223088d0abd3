//! Pacing between outbound API calls.

use std::time::{Duration, Instant};

/// Gate that enforces a minimum interval between calls. The collection
/// loop waits on this instead of sleeping inline, which keeps the pacing
/// policy in one place and out of the call sites.
pub struct IntervalGate {
    interval: Duration,
    last_pass: Option<Instant>,
}

impl IntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: None,
        }
    }

    /// Block until at least the configured interval has elapsed since the
    /// previous pass. The first pass never waits.
    pub fn wait(&mut self) {
        if let Some(last) = self.last_pass {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last_pass = Some(Instant::now());
    }
}
