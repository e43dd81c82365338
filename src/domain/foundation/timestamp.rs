//! Timestamp value object for immutable points in time.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    ///
    /// Saturates at the latest representable instant.
    pub fn plus_secs(&self, secs: u64) -> Self {
        let shifted = seconds(secs).and_then(|delta| self.0.checked_add_signed(delta));
        Self(shifted.unwrap_or(DateTime::<Utc>::MAX_UTC))
    }

    /// Creates a new timestamp by subtracting the specified number of seconds.
    ///
    /// Saturates at the earliest representable instant.
    pub fn minus_secs(&self, secs: u64) -> Self {
        let shifted = seconds(secs).and_then(|delta| self.0.checked_sub_signed(delta));
        Self(shifted.unwrap_or(DateTime::<Utc>::MIN_UTC))
    }
}

fn seconds(secs: u64) -> Option<TimeDelta> {
    i64::try_from(secs).ok().and_then(TimeDelta::try_seconds)
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Timestamp(Utc::now());
        let ts = Timestamp::now();
        let after = Timestamp(Utc::now());

        assert!(!ts.is_before(&before));
        assert!(!after.is_before(&ts));
    }

    #[test]
    fn plus_and_minus_secs_are_inverse() {
        let ts = Timestamp::now();
        assert_eq!(ts.plus_secs(90).minus_secs(90), ts);
    }

    #[test]
    fn is_before_compares_correctly() {
        let earlier = Timestamp::now();
        let later = earlier.plus_secs(1);
        assert!(earlier.is_before(&later));
        assert!(!later.is_before(&earlier));
    }

    #[test]
    fn huge_offsets_saturate_instead_of_overflowing() {
        let ts = Timestamp::now();

        assert_eq!(ts.plus_secs(10_000_000_000_000).0, DateTime::<Utc>::MAX_UTC);
        assert_eq!(ts.plus_secs(u64::MAX).0, DateTime::<Utc>::MAX_UTC);
        assert_eq!(ts.minus_secs(u64::MAX).0, DateTime::<Utc>::MIN_UTC);
        assert!(ts.is_before(&ts.plus_secs(u64::MAX)));
    }
}
