//! Unit constants in milliseconds
//!
//! A synthetic month is a fixed 30-day span. It approximates a calendar
//! month and is never adjusted for 28/29/31-day months.

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Days in one synthetic month
pub const SYNTHETIC_MONTH_DAYS: i64 = 30;

pub const MS_PER_SYNTHETIC_MONTH: i64 = SYNTHETIC_MONTH_DAYS * MS_PER_DAY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_values() {
        assert_eq!(MS_PER_MINUTE, 60_000);
        assert_eq!(MS_PER_HOUR, 3_600_000);
        assert_eq!(MS_PER_DAY, 86_400_000);
        assert_eq!(MS_PER_SYNTHETIC_MONTH, 2_592_000_000);
    }
}
