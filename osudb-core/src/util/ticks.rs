use serde::Serialize;
use std::fmt;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// 0001-01-01T00:00:00Z, the zero point of a tick count.
pub const EPOCH: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

pub const TICKS_PER_SECOND: u64 = 10_000_000;
const NANOS_PER_TICK: u64 = 100;

/// An instant stored as 100-nanosecond ticks since [`EPOCH`].
///
/// The raw tick count is kept as read. Values the client writes as
/// placeholders (zero, or far-future sentinels) are not clamped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn ticks(self) -> u64 {
        self.0
    }

    /// Time elapsed since [`EPOCH`].
    pub fn since_epoch(self) -> Duration {
        let secs = (self.0 / TICKS_PER_SECOND) as i64;
        let nanos = ((self.0 % TICKS_PER_SECOND) * NANOS_PER_TICK) as i32;
        Duration::new(secs, nanos)
    }

    /// The absolute instant, or `None` when it lies past the range
    /// `OffsetDateTime` can represent.
    pub fn to_datetime(self) -> Option<OffsetDateTime> {
        EPOCH.checked_add(self.since_epoch())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{dt}"),
            None => write!(f, "{} ticks", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ticks_is_epoch() {
        assert_eq!(Timestamp(0).to_datetime(), Some(EPOCH));
        assert_eq!(EPOCH.year(), 1);
        assert_eq!(EPOCH.unix_timestamp(), -62_135_596_800);
    }

    #[test]
    fn unix_epoch_ticks() {
        // 1970-01-01 in ticks since year 1
        let ts = Timestamp(621_355_968_000_000_000);
        assert_eq!(ts.to_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
    }

    #[test]
    fn sub_second_precision_is_kept() {
        let ts = Timestamp(TICKS_PER_SECOND + 1);
        let dt = ts.to_datetime().unwrap();
        assert_eq!(dt - EPOCH, Duration::new(1, 100));
    }

    #[test]
    fn out_of_range_passes_through_raw() {
        let ts = Timestamp(u64::MAX);
        assert_eq!(ts.to_datetime(), None);
        assert_eq!(ts.ticks(), u64::MAX);
        assert_eq!(ts.to_string(), format!("{} ticks", u64::MAX));
    }
}
