//! Decomposition of an elapsed duration into counter components

use serde::Serialize;

use warclock_core::{
    Timestamp, WarclockError, WarclockResult, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE,
    MS_PER_SECOND, MS_PER_SYNTHETIC_MONTH, SYNTHETIC_MONTH_DAYS,
};

/// Elapsed time between a start instant and a current instant
///
/// For `current >= start` every field is non-negative and `days`, `hours`,
/// `minutes`, `seconds` are bounded by 30, 24, 60, 60.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBreakdown {
    /// Complete synthetic (30-day) months
    pub months: i64,
    /// Days into the current synthetic month
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// Whole days since start, independent of the month split
    pub total_days: i64,
    /// Start instant as supplied by the caller
    pub start: Timestamp,
}

impl TimeBreakdown {
    /// Days accounted for by the month/day split
    #[inline]
    pub fn month_days(&self) -> i64 {
        self.months * SYNTHETIC_MONTH_DAYS + self.days
    }

    /// True when every component is within its modulus
    pub fn is_normalized(&self) -> bool {
        self.months >= 0
            && self.total_days >= 0
            && (0..SYNTHETIC_MONTH_DAYS).contains(&self.days)
            && (0..24).contains(&self.hours)
            && (0..60).contains(&self.minutes)
            && (0..60).contains(&self.seconds)
    }
}

/// Decompose the time elapsed from `start` to `current`.
///
/// Quotients use floor division and remainders use the truncating `%`, so a
/// negative elapsed duration (start after current) produces negative
/// `months`/`total_days` and non-positive remainders instead of an error.
/// Use [`try_decompose`] to reject that case.
pub fn decompose(start: Timestamp, current: Timestamp) -> TimeBreakdown {
    let elapsed = current.millis_since(start);

    TimeBreakdown {
        months: elapsed.div_euclid(MS_PER_SYNTHETIC_MONTH),
        days: (elapsed % MS_PER_SYNTHETIC_MONTH).div_euclid(MS_PER_DAY),
        hours: (elapsed % MS_PER_DAY).div_euclid(MS_PER_HOUR),
        minutes: (elapsed % MS_PER_HOUR).div_euclid(MS_PER_MINUTE),
        seconds: (elapsed % MS_PER_MINUTE).div_euclid(MS_PER_SECOND),
        total_days: elapsed.div_euclid(MS_PER_DAY),
        start,
    }
}

/// Like [`decompose`], but fails when `current` is earlier than `start`
pub fn try_decompose(start: Timestamp, current: Timestamp) -> WarclockResult<TimeBreakdown> {
    if current < start {
        return Err(WarclockError::StartInFuture {
            start,
            now: current,
        });
    }
    Ok(decompose(start, current))
}
