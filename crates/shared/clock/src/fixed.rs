use std::sync::Mutex;

use chrono::Duration;
use meridian_core::Timestamp;
use meridian_ports::Clock;

/// Frozen clock that only moves when explicitly told to.
///
/// Lets a test pin "now" for the trailing-volume window, then advance it
/// and observe the window slide off older records.
pub struct FixedClock {
    current: Mutex<Timestamp>,
}

impl FixedClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, time: Timestamp) {
        *self.current.lock().unwrap() = time;
    }

    /// Move the frozen time forward (or backward with a negative duration).
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap();
        *current += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.current.lock().unwrap()
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
