//! Counter rendering: "MM MONTHS / DD DAYS / HH:MM:SS"

use std::fmt;

use warclock_core::{Timestamp, WarclockResult};

use crate::{decompose, try_decompose, TimeBreakdown};

impl TimeBreakdown {
    /// Months as displayed, at least two digits
    pub fn months_field(&self) -> String {
        format!("{:02}", self.months)
    }

    /// Days into the month as displayed
    pub fn days_field(&self) -> String {
        format!("{:02}", self.days)
    }

    /// Clock part as displayed, `HH:MM:SS`
    pub fn time_field(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Renders the full counter line. Fields wider than two digits are never
/// truncated.
impl fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} MONTHS / {:02} DAYS / {:02}:{:02}:{:02}",
            self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Render the counter for the time elapsed from `start` to `current`
pub fn format(start: Timestamp, current: Timestamp) -> String {
    decompose(start, current).to_string()
}

/// Like [`format`], but fails when `current` is earlier than `start`
pub fn try_format(start: Timestamp, current: Timestamp) -> WarclockResult<String> {
    Ok(try_decompose(start, current)?.to_string())
}

/// Formatter bound to a fixed start instant
///
/// Holds no state besides the start; every call recomputes from scratch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElapsedTimeFormatter {
    start: Timestamp,
}

impl ElapsedTimeFormatter {
    pub fn new(start: Timestamp) -> Self {
        ElapsedTimeFormatter { start }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn decompose_at(&self, now: Timestamp) -> TimeBreakdown {
        decompose(self.start, now)
    }

    pub fn try_decompose_at(&self, now: Timestamp) -> WarclockResult<TimeBreakdown> {
        try_decompose(self.start, now)
    }

    pub fn format_at(&self, now: Timestamp) -> String {
        format(self.start, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    use warclock_core::WarclockError;

    fn war_start() -> Timestamp {
        Timestamp::parse("2022-02-24T00:00:00").unwrap()
    }

    #[test]
    fn test_zero_elapsed() {
        let start = war_start();
        assert_eq!(format(start, start), "00 MONTHS / 00 DAYS / 00:00:00");
    }

    #[test]
    fn test_one_day() {
        let start = war_start();
        let now = start + Duration::from_secs(24 * 3600);
        assert_eq!(format(start, now), "00 MONTHS / 01 DAYS / 00:00:00");
    }

    #[test]
    fn test_one_synthetic_month() {
        let start = war_start();
        let now = start + Duration::from_secs(30 * 24 * 3600);
        assert_eq!(format(start, now), "01 MONTHS / 00 DAYS / 00:00:00");
    }

    #[test]
    fn test_one_hour() {
        let start = war_start();
        let now = start + Duration::from_secs(3600);
        assert_eq!(format(start, now), "00 MONTHS / 00 DAYS / 01:00:00");
    }

    #[test]
    fn test_pads_single_digits() {
        let start = war_start();
        let now = start + Duration::from_secs(5 * 60);
        assert_eq!(format(start, now), "00 MONTHS / 00 DAYS / 00:05:00");
    }

    #[test]
    fn test_months_not_truncated() {
        let start = Timestamp::from_millis(0);
        let now = start + Duration::from_secs(123 * 30 * 86_400 + 7);
        assert_eq!(format(start, now), "123 MONTHS / 00 DAYS / 00:00:07");
    }

    #[test]
    fn test_display_fields() {
        let b = TimeBreakdown {
            months: 35,
            days: 15,
            hours: 14,
            minutes: 30,
            seconds: 45,
            total_days: 35 * 30 + 15,
            start: war_start(),
        };

        assert_eq!(b.months_field(), "35");
        assert_eq!(b.days_field(), "15");
        assert_eq!(b.time_field(), "14:30:45");
        assert_eq!(b.to_string(), "35 MONTHS / 15 DAYS / 14:30:45");
    }

    #[test]
    fn test_negative_elapsed_renders_sign() {
        let start = war_start();
        let now = start - Duration::from_secs(1);
        assert_eq!(format(start, now), "-1 MONTHS / -1 DAYS / -1:-1:-1");

        let err = try_format(start, now).unwrap_err();
        assert!(matches!(err, WarclockError::StartInFuture { .. }));
    }

    #[test]
    fn test_bound_formatter() {
        let start = war_start();
        let formatter = ElapsedTimeFormatter::new(start);
        let now = start + Duration::from_secs(86_400 + 61);

        assert_eq!(formatter.start(), start);
        assert_eq!(formatter.format_at(now), "00 MONTHS / 01 DAYS / 00:01:01");
        assert_eq!(formatter.decompose_at(now), decompose(start, now));
        assert!(formatter.try_decompose_at(start - Duration::from_millis(1)).is_err());
    }

    /// Splits a rendered counter into its five numeric fields, checking the
    /// literal separators on the way.
    fn parse_counter(line: &str) -> Option<[&str; 5]> {
        let (months, rest) = line.split_once(" MONTHS / ")?;
        let (days, clock) = rest.split_once(" DAYS / ")?;
        let mut hms = clock.split(':');
        let fields = [months, days, hms.next()?, hms.next()?, hms.next()?];
        if hms.next().is_some() {
            return None;
        }
        Some(fields)
    }

    fn all_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit())
    }

    // 2022-02-24 .. 2122-12-31
    const START_MS: i64 = 1_645_660_800_000;
    const END_MS: i64 = 4_828_118_400_000;

    proptest! {
        #[test]
        fn output_has_counter_shape(now in START_MS..END_MS) {
            let line = format(Timestamp(START_MS), Timestamp(now));
            let fields = parse_counter(&line).expect("counter shape");

            prop_assert!(fields[0].len() >= 2 && all_digits(fields[0]));
            for field in &fields[1..] {
                prop_assert_eq!(field.len(), 2);
                prop_assert!(all_digits(field));
            }

            let values: Vec<i64> = fields.iter().map(|f| f.parse().unwrap()).collect();
            prop_assert!(values[1] < 30);
            prop_assert!(values[2] < 24);
            prop_assert!(values[3] < 60);
            prop_assert!(values[4] < 60);
        }

        #[test]
        fn fields_match_full_line(start in -END_MS..END_MS, elapsed in 0i64..END_MS) {
            let b = decompose(Timestamp(start), Timestamp(start + elapsed));
            let expected = format!(
                "{} MONTHS / {} DAYS / {}",
                b.months_field(),
                b.days_field(),
                b.time_field()
            );
            prop_assert_eq!(b.to_string(), expected);
        }

        #[test]
        fn zero_elapsed_identity(t in -END_MS..END_MS) {
            prop_assert_eq!(
                format(Timestamp(t), Timestamp(t)),
                "00 MONTHS / 00 DAYS / 00:00:00"
            );
        }
    }
}
