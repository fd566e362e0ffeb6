//! Clock port definition.

use chrono::{DateTime, FixedOffset, Utc};

/// Local and UTC readings taken from the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// Local wall-clock time.
    pub local: DateTime<FixedOffset>,
    /// Coordinated universal time.
    pub utc: DateTime<Utc>,
}

impl ClockReading {
    /// Returns the local UTC offset of this reading, in seconds east of UTC.
    #[must_use]
    pub fn offset_seconds(&self) -> i32 {
        self.local.offset().local_minus_utc()
    }
}

/// Port for reading the current time.
///
/// Consumers take `Arc<dyn Clock>` so tests can substitute a fixed time.
pub trait Clock: Send + Sync {
    /// Returns the current moment in local time.
    fn now_local(&self) -> DateTime<FixedOffset>;

    /// Returns the current moment in UTC.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Returns both readings for one instant.
    fn now(&self) -> ClockReading {
        let utc = self.now_utc();
        let local = utc.with_timezone(self.now_local().offset());
        ClockReading { local, utc }
    }
}
