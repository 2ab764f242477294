// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use plaza_core::application::ports::time::Clock;

/// Clock pinned to one instant so timestamp assertions are exact.
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
