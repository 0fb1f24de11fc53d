mod format;
mod maths_utils;
mod perf;
pub(crate) mod time_utils;

pub use format::{
    format_count, format_duration, format_pct, format_pnl, format_r_multiple, format_utc_offset,
};
pub use time_utils::{
    AppInstant, TimeUtils, format_iso_date, local_utc_offset_hours, parse_iso_date, today_local,
};

pub(crate) use maths_utils::{mean, safe_ratio};
