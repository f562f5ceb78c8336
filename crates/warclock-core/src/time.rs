//! Instant type for warclock
//!
//! A `Timestamp` is an absolute point in time, stored as signed
//! milliseconds since the Unix epoch (UTC). There is no time zone and no
//! leap-second handling.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::{WarclockError, WarclockResult};

/// 9999-12-31T23:59:59.999Z, the last instant RFC 3339 rendering supports
const MAX_RFC3339_MILLIS: i64 = 253_402_300_799_999;

/// Absolute instant, milliseconds since the Unix epoch
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const UNIX_EPOCH: Timestamp = Timestamp(0);
    pub const MAX: Timestamp = Timestamp(i64::MAX);
    pub const MIN: Timestamp = Timestamp(i64::MIN);

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Sample the wall clock.
    ///
    /// This is the only clock read in warclock; the formatter never calls it.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    pub fn from_system_time(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(after) => Timestamp(i64::try_from(after.as_millis()).unwrap_or(i64::MAX)),
            Err(before) => {
                let millis = i64::try_from(before.duration().as_millis()).unwrap_or(i64::MAX);
                Timestamp(-millis)
            }
        }
    }

    pub fn to_system_time(self) -> SystemTime {
        let magnitude = Duration::from_millis(self.0.unsigned_abs());
        if self.0 >= 0 {
            UNIX_EPOCH + magnitude
        } else {
            UNIX_EPOCH - magnitude
        }
    }

    /// Parse an RFC 3339 instant.
    ///
    /// Accepts `2022-02-24T00:00:00Z`, the same without `Z`, and a space in
    /// place of `T`. Text without an offset is read as UTC.
    pub fn parse(text: &str) -> WarclockResult<Self> {
        let text = text.trim();
        humantime::parse_rfc3339_weak(text)
            .map(Self::from_system_time)
            .map_err(|e| WarclockError::InvalidTimestamp(format!("{text:?}: {e}")))
    }

    /// Signed milliseconds from `earlier` to `self`, saturating at the i64 range
    #[inline]
    pub fn millis_since(self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        Timestamp(self.0.saturating_add(millis))
    }

    #[inline]
    pub fn saturating_sub(self, duration: Duration) -> Self {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        Timestamp(self.0.saturating_sub(millis))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

/// Elapsed milliseconds, negative when `rhs` is later than `self`
impl Sub<Timestamp> for Timestamp {
    type Output = i64;

    #[inline]
    fn sub(self, rhs: Timestamp) -> Self::Output {
        self.millis_since(rhs)
    }
}

impl FromStr for Timestamp {
    type Err = WarclockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}ms)", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=MAX_RFC3339_MILLIS).contains(&self.0) {
            write!(f, "{}", humantime::format_rfc3339_millis(self.to_system_time()))
        } else {
            // Outside what RFC 3339 rendering covers
            write!(f, "{}ms", self.0)
        }
    }
}
