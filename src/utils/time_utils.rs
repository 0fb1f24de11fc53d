use anyhow::{Context, Result};
use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};

use crate::config::CALENDAR;

pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const DAYS_IN_WEEK: u64 = 7;
    pub const MONTHS_IN_YEAR: i64 = 12;
    pub const MONTHS_IN_QUARTER: i64 = 3;
    pub const SECS_IN_H: f64 = 3600.0;
}

/// Absolute month number (`year * 12 + month0`) so month arithmetic is plain subtraction.
pub(crate) fn month_index(date: NaiveDate) -> i64 {
    date.year() as i64 * TimeUtils::MONTHS_IN_YEAR + date.month0() as i64
}

/// Absolute quarter number (`year * 4 + quarter0`).
pub(crate) fn quarter_index(date: NaiveDate) -> i64 {
    month_index(date).div_euclid(TimeUtils::MONTHS_IN_QUARTER)
}

/// First day of the month with absolute number `index`.
/// Indices outside chrono's calendar saturate to the first or last representable month.
pub(crate) fn first_day_of_month_index(index: i64) -> NaiveDate {
    let index = index.clamp(month_index(NaiveDate::MIN), month_index(NaiveDate::MAX));
    let year = index.div_euclid(TimeUtils::MONTHS_IN_YEAR) as i32;
    let month = index.rem_euclid(TimeUtils::MONTHS_IN_YEAR) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// Last day of the month containing `date` (handles leap years).
pub(crate) fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_day_of_month_index(month_index(date));
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Days to step back from `date` to reach the most recent `week_start`.
fn days_since_week_start(date: NaiveDate, week_start: Weekday) -> u64 {
    let today = date.weekday().num_days_from_monday() as u64;
    let start = week_start.num_days_from_monday() as u64;
    (TimeUtils::DAYS_IN_WEEK + today - start) % TimeUtils::DAYS_IN_WEEK
}

/// Most recent `week_start` on or before `date`.
/// Weeks that would begin before chrono's first date start at the first `week_start` after it.
pub(crate) fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date.checked_sub_days(Days::new(days_since_week_start(date, week_start)))
        .unwrap_or_else(|| earliest_week_start(week_start))
}

pub(crate) fn earliest_week_start(week_start: Weekday) -> NaiveDate {
    let back = days_since_week_start(NaiveDate::MIN, week_start);
    let forward = (TimeUtils::DAYS_IN_WEEK - back) % TimeUtils::DAYS_IN_WEEK;
    NaiveDate::MIN
        .checked_add_days(Days::new(forward))
        .unwrap_or(NaiveDate::MIN)
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// The viewer's current UTC offset in (possibly fractional) hours.
/// Read once at the boundary and passed down; binning never touches the clock itself.
pub fn local_utc_offset_hours() -> f64 {
    Local::now().offset().local_minus_utc() as f64 / TimeUtils::SECS_IN_H
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(CALENDAR.iso_date_format).to_string()
}

pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), CALENDAR.iso_date_format)
        .with_context(|| format!("Invalid ISO date '{}' (expected YYYY-MM-DD)", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_index_round_trips_across_years() {
        let jan = ymd(2024, 1, 17);
        assert_eq!(first_day_of_month_index(month_index(jan) - 1), ymd(2023, 12, 1));
        assert_eq!(first_day_of_month_index(month_index(jan) - 13), ymd(2022, 12, 1));
        assert_eq!(first_day_of_month_index(month_index(jan) + 11), ymd(2024, 12, 1));
    }

    #[test]
    fn last_day_of_month_honours_leap_years() {
        assert_eq!(last_day_of_month(ymd(2024, 2, 10)), ymd(2024, 2, 29));
        assert_eq!(last_day_of_month(ymd(2023, 2, 10)), ymd(2023, 2, 28));
        assert_eq!(last_day_of_month(ymd(2023, 12, 31)), ymd(2023, 12, 31));
    }

    #[test]
    fn start_of_week_uses_requested_convention() {
        // 2024-03-15 is a Friday
        let friday = ymd(2024, 3, 15);
        assert_eq!(start_of_week(friday, Weekday::Mon), ymd(2024, 3, 11));
        assert_eq!(start_of_week(friday, Weekday::Sun), ymd(2024, 3, 10));
        assert_eq!(start_of_week(ymd(2024, 3, 11), Weekday::Mon), ymd(2024, 3, 11));
    }

    #[test]
    fn quarter_index_groups_three_months() {
        assert_eq!(quarter_index(ymd(2024, 1, 1)), quarter_index(ymd(2024, 3, 31)));
        assert_eq!(quarter_index(ymd(2024, 4, 1)), quarter_index(ymd(2024, 1, 1)) + 1);
        assert_eq!(quarter_index(ymd(2023, 12, 31)) + 1, quarter_index(ymd(2024, 1, 1)));
    }

    #[test]
    fn parse_iso_date_rejects_garbage() {
        assert_eq!(parse_iso_date(" 2024-02-29 ").unwrap(), ymd(2024, 2, 29));
        assert!(parse_iso_date("29/02/2024").is_err());
    }

    #[test]
    fn extreme_month_indices_saturate() {
        assert_eq!(first_day_of_month_index(i64::MIN / 2).year(), NaiveDate::MIN.year());
        assert_eq!(earliest_week_start(Weekday::Mon).weekday(), Weekday::Mon);
        assert!(earliest_week_start(Weekday::Mon) >= NaiveDate::MIN);
    }
}
