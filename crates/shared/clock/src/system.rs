use chrono::Utc;
use meridian_core::Timestamp;
use meridian_ports::Clock;

/// Wall clock for the live terminal.
///
/// Each header refresh reads the current time through this clock, which is
/// why re-running a summary later over the same records can legitimately
/// produce a different trailing volume.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
