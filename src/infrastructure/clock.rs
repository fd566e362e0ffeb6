//! Clock adapters.

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

use crate::domain::ports::Clock;

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant with a fixed local offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Creates a clock at `instant` whose local time is UTC.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self::with_offset(instant, Utc.fix())
    }

    /// Creates a clock at `instant` with the given local offset.
    #[must_use]
    pub const fn with_offset(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }
}

impl Clock for FixedClock {
    fn now_local(&self) -> DateTime<FixedOffset> {
        self.instant.with_timezone(&self.offset)
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 1, 30, 0).unwrap()
    }

    #[test]
    fn test_fixed_clock_returns_same_instant() {
        let clock = FixedClock::new(instant());
        assert_eq!(clock.now_utc(), instant());
        assert_eq!(clock.now_utc(), clock.now_utc());
    }

    #[test]
    fn test_local_and_utc_differ_by_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let clock = FixedClock::with_offset(instant(), offset);

        let local = clock.now_local();
        let utc = clock.now_utc();
        let wall_clock_gap = local.naive_local() - utc.naive_utc();

        assert_eq!(local, utc);
        assert_eq!(wall_clock_gap.num_seconds(), 2 * 3600);
    }

    #[test]
    fn test_negative_offset() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let reading = FixedClock::with_offset(instant(), offset).now();

        assert_eq!(reading.offset_seconds(), -5 * 3600);
        assert_eq!(
            (reading.local.naive_local() - reading.utc.naive_utc()).num_seconds(),
            -5 * 3600
        );
    }

    #[test]
    fn test_system_clock_reading_matches_offset() {
        let reading = SystemClock.now();
        let gap = reading.local.naive_local() - reading.utc.naive_utc();

        assert_eq!(reading.local, reading.utc);
        assert_eq!(gap.num_seconds(), i64::from(reading.offset_seconds()));
    }
}
