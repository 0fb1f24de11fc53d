use itertools::Itertools;

/// Signed currency amount with thousands separators, e.g. `+$1,234.50`, `-$12.00`.
pub fn format_pnl(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Ratio in `[0, 1]` rendered as a percentage with one decimal.
pub fn format_pct(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

pub fn format_count(count: usize) -> String {
    group_thousands(count as u64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::new();
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(digits.as_bytes()[head..].chunks(3).filter_map(|c| std::str::from_utf8(c).ok()));
    groups.iter().join(",")
}

/// R multiple with sign and two decimals, e.g. `+1.25R`.
pub fn format_r_multiple(r: f64) -> String {
    format!("{:+.2}R", r)
}

/// `UTC`, `UTC+2`, `UTC-5`, `UTC+5:30`.
pub fn format_utc_offset(offset_hours: f64) -> String {
    if !offset_hours.is_finite() || offset_hours == 0.0 {
        return "UTC".to_string();
    }
    let sign = if offset_hours < 0.0 { '-' } else { '+' };
    let total_minutes = (offset_hours.abs() * 60.0).round() as u64;
    match total_minutes % 60 {
        0 => format!("UTC{}{}", sign, total_minutes / 60),
        minutes => format!("UTC{}{}:{:02}", sign, total_minutes / 60, minutes),
    }
}

/// Compact duration, e.g. `45s`, `14m`, `3h`, `2d`, `1Y 2M`.
pub fn format_duration(ms: i64) -> String {
    let secs = ms.max(0) / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    let days = hours / 24;
    if days < 30 {
        return format!("{}d", days);
    }
    let months = days / 30;
    if months < 12 {
        return format!("{}M", months);
    }
    format!("{}Y {}M", months / 12, months % 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_is_signed_and_grouped() {
        assert_eq!(format_pnl(1234.5), "+$1,234.50");
        assert_eq!(format_pnl(-12.0), "-$12.00");
        assert_eq!(format_pnl(0.0), "+$0.00");
        assert_eq!(format_pnl(1_000_000.004), "+$1,000,000.00");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_345), "12,345");
    }

    #[test]
    fn durations_pick_the_largest_unit() {
        assert_eq!(format_duration(45_000), "45s");
        assert_eq!(format_duration(3 * 3_600_000), "3h");
        assert_eq!(format_duration(400 * 86_400_000), "1Y 1M");
        assert_eq!(format_duration(-5), "0s");
    }

    #[test]
    fn utc_offsets_read_like_clock_labels() {
        assert_eq!(format_utc_offset(0.0), "UTC");
        assert_eq!(format_utc_offset(2.0), "UTC+2");
        assert_eq!(format_utc_offset(-5.0), "UTC-5");
        assert_eq!(format_utc_offset(5.5), "UTC+5:30");
        assert_eq!(format_utc_offset(f64::NAN), "UTC");
    }

    #[test]
    fn r_multiples_are_signed() {
        assert_eq!(format_r_multiple(1.254), "+1.25R");
        assert_eq!(format_r_multiple(-0.5), "-0.50R");
    }

    #[test]
    fn pct_has_one_decimal() {
        assert_eq!(format_pct(0.5551), "55.5%");
    }
}
