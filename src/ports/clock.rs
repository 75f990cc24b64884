//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Source of the timestamps written into progress reports and validation results.
///
/// Tests pin it to a fixed instant so rendered output is reproducible.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
