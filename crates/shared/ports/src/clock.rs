use meridian_core::Timestamp;

/// Port for time abstraction
///
/// The header aggregator's trailing-volume window depends on "now", which
/// is always injected through this port so repeated calls are reproducible
/// under test:
/// - Real system time for the live terminal
/// - Fixed/steppable time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
