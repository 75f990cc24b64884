//! System clock adapter stamping reports and validation results.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Reads the wall clock in UTC.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
