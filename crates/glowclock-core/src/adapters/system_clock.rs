use chrono::{DateTime, Utc};
use glowclock_proto::ports::time::TimeSource;

/// [`TimeSource`] backed by the operating system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
