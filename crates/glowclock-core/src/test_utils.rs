use std::sync::Mutex;

use chrono::{DateTime, Utc};
use glowclock_proto::ports::time::TimeSource;

/// [`TimeSource`] that reports a settable instant.
#[derive(Debug)]
pub struct FixedTimeSource {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedTimeSource {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().expect("poisoned test clock") = instant;
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().expect("poisoned test clock")
    }
}
