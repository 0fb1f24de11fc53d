//! Calendar conventions used by period resolution and labels.

use chrono::{Locale, Weekday};

pub struct CalendarConfig {
    /// First day of a `Week` period. Applies to both range resolution and
    /// `offset_for_date`, so the two always agree.
    pub week_start: Weekday,
    /// Used when no locale is passed on the command line (or it fails to parse).
    pub default_locale: Locale,
    pub all_time_label: &'static str,
    /// ISO-8601 calendar date, as sent in `date_start` / `date_end`.
    pub iso_date_format: &'static str,
    pub week_label_format: &'static str,
    pub month_label_format: &'static str,
}

pub const CALENDAR: CalendarConfig = CalendarConfig {
    week_start: Weekday::Mon,
    default_locale: Locale::en_US,
    all_time_label: "All Time",
    iso_date_format: "%Y-%m-%d",
    week_label_format: "%b %-d",
    month_label_format: "%B %Y",
};
