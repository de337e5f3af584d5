use std::fmt::Debug;

use chrono::{DateTime, Utc};

/// Source of the current wall-clock instant.
///
/// Implementations must be cheap to call; the clock ticker queries the source
/// once per second.
pub trait TimeSource: Debug + Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}
