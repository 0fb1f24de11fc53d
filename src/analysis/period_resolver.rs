use chrono::{Datelike, Days, Locale, NaiveDate, Weekday};

use crate::{
    config::CALENDAR,
    domain::{DateRange, PeriodKind, PeriodOffset, PeriodState},
    utils::time_utils::{
        TimeUtils, earliest_week_start, first_day_of_month_index, last_day_of_month, month_index,
        quarter_index, start_of_week,
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Turns `(kind, offset)` into concrete calendar ranges relative to a fixed "today".
///
/// The resolver never reads the clock after construction, so every answer is a pure
/// function of `today`, the week-start convention and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodResolver {
    today: NaiveDate,
    week_start: Weekday,
}

impl PeriodResolver {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            week_start: CALENDAR.week_start,
        }
    }

    pub fn today_local() -> Self {
        Self::new(crate::utils::today_local())
    }

    pub fn with_week_start(self, week_start: Weekday) -> Self {
        Self { week_start, ..self }
    }

    #[inline]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    #[inline]
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn resolve(&self, state: PeriodState) -> DateRange {
        self.resolve_range(state.kind(), state.offset())
    }

    pub fn resolve_range(&self, kind: PeriodKind, offset: PeriodOffset) -> DateRange {
        let back = offset.value() as i64;
        match kind {
            PeriodKind::All => DateRange::All,
            PeriodKind::Week => {
                let current = start_of_week(self.today, self.week_start);
                let start = current
                    .checked_sub_days(Days::new(back as u64 * TimeUtils::DAYS_IN_WEEK))
                    .unwrap_or_else(|| earliest_week_start(self.week_start));
                let end = start
                    .checked_add_days(Days::new(TimeUtils::DAYS_IN_WEEK - 1))
                    .unwrap_or(NaiveDate::MAX);
                DateRange::bounded(start, end)
            }
            PeriodKind::Month => {
                let start = first_day_of_month_index(month_index(self.today) - back);
                DateRange::bounded(start, last_day_of_month(start))
            }
            PeriodKind::Quarter => {
                let first_month = (quarter_index(self.today) - back) * TimeUtils::MONTHS_IN_QUARTER;
                let start = first_day_of_month_index(first_month);
                let end = last_day_of_month(first_day_of_month_index(
                    month_index(start) + TimeUtils::MONTHS_IN_QUARTER - 1,
                ));
                DateRange::bounded(start, end)
            }
            PeriodKind::Year => {
                let first_month = (self.today.year() as i64 - back) * TimeUtils::MONTHS_IN_YEAR;
                let start = first_day_of_month_index(first_month);
                let end = last_day_of_month(first_day_of_month_index(
                    month_index(start) + TimeUtils::MONTHS_IN_YEAR - 1,
                ));
                DateRange::bounded(start, end)
            }
        }
    }

    /// Smallest offset whose range contains `target`. Dates after the current period clamp to 0.
    pub fn offset_for_date(&self, kind: PeriodKind, target: NaiveDate) -> PeriodOffset {
        let distance = match kind {
            PeriodKind::All => 0,
            PeriodKind::Week => {
                let current = start_of_week(self.today, self.week_start);
                let target_week = start_of_week(target, self.week_start);
                (current - target_week).num_days() / TimeUtils::DAYS_IN_WEEK as i64
            }
            PeriodKind::Month => month_index(self.today) - month_index(target),
            PeriodKind::Quarter => quarter_index(self.today) - quarter_index(target),
            PeriodKind::Year => self.today.year() as i64 - target.year() as i64,
        };
        PeriodOffset::from_signed(distance)
    }

    /// State after the user picks `kind`: aligned to the newest period that has data.
    pub fn select_kind(&self, kind: PeriodKind, latest_data_date: Option<NaiveDate>) -> PeriodState {
        let offset = match (kind, latest_data_date) {
            (PeriodKind::All, _) | (_, None) => PeriodOffset::CURRENT,
            (kind, Some(latest)) => self.offset_for_date(kind, latest),
        };
        let state = PeriodState::new(kind, offset);

        #[cfg(debug_assertions)]
        if DF.log_period_nav {
            log::info!(
                "PERIOD: selected {} (latest data {:?}) -> {} = {}",
                kind,
                latest_data_date,
                state,
                self.resolve(state)
            );
        }
        state
    }

    pub fn label(&self, state: PeriodState, locale: Locale) -> String {
        self.format_label(state.kind(), state.offset(), locale)
    }

    pub fn format_label(&self, kind: PeriodKind, offset: PeriodOffset, locale: Locale) -> String {
        format_range_label(kind, &self.resolve_range(kind, offset), locale)
    }
}

/// Short label for an already-resolved range.
pub fn format_range_label(kind: PeriodKind, range: &DateRange, locale: Locale) -> String {
    let DateRange::Bounded { start, end } = *range else {
        return CALENDAR.all_time_label.to_string();
    };
    match kind {
        PeriodKind::All => CALENDAR.all_time_label.to_string(),
        PeriodKind::Week => format!(
            "{} – {}",
            start.format_localized(CALENDAR.week_label_format, locale),
            end.format_localized(CALENDAR.week_label_format, locale)
        ),
        PeriodKind::Month => start
            .format_localized(CALENDAR.month_label_format, locale)
            .to_string(),
        PeriodKind::Quarter => format!("{} Q{}", start.year(), start.month0() / 3 + 1),
        PeriodKind::Year => start.year().to_string(),
    }
}

/// Locale from a POSIX-style tag such as `en_US` or `fr-FR`; falls back to the configured default.
pub fn parse_locale(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).unwrap_or_else(|_| {
        log::warn!(
            "Unknown locale '{}', using {:?}",
            tag,
            CALENDAR.default_locale
        );
        CALENDAR.default_locale
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounds(range: DateRange) -> (NaiveDate, NaiveDate) {
        match range {
            DateRange::Bounded { start, end } => (start, end),
            DateRange::All => panic!("expected a bounded range"),
        }
    }

    fn bounded_kinds() -> impl Iterator<Item = PeriodKind> {
        PeriodKind::iter().filter(|k| *k != PeriodKind::All)
    }

    fn leap_day_resolver() -> PeriodResolver {
        PeriodResolver::new(ymd(2024, 3, 15))
    }

    #[test]
    fn all_resolves_to_unbounded() {
        let resolver = leap_day_resolver();
        assert_eq!(resolver.resolve_range(PeriodKind::All, PeriodOffset::new(3)), DateRange::All);
        assert_eq!(
            resolver.format_label(PeriodKind::All, PeriodOffset::CURRENT, Locale::en_US),
            "All Time"
        );
    }

    #[test]
    fn previous_month_over_leap_february() {
        let resolver = leap_day_resolver();
        let range = resolver.resolve_range(PeriodKind::Month, PeriodOffset::new(1));
        assert_eq!(bounds(range), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(
            resolver.format_label(PeriodKind::Month, PeriodOffset::new(1), Locale::en_US),
            "February 2024"
        );
    }

    #[test]
    fn month_offsets_roll_over_january() {
        let resolver = PeriodResolver::new(ymd(2024, 1, 10));
        assert_eq!(
            bounds(resolver.resolve_range(PeriodKind::Month, PeriodOffset::new(1))),
            (ymd(2023, 12, 1), ymd(2023, 12, 31))
        );
        assert_eq!(
            bounds(resolver.resolve_range(PeriodKind::Month, PeriodOffset::new(25))),
            (ymd(2021, 12, 1), ymd(2021, 12, 31))
        );
    }

    #[test]
    fn week_starts_on_monday() {
        let resolver = leap_day_resolver(); // Friday
        assert_eq!(
            bounds(resolver.resolve_range(PeriodKind::Week, PeriodOffset::CURRENT)),
            (ymd(2024, 3, 11), ymd(2024, 3, 17))
        );
        assert_eq!(
            bounds(resolver.resolve_range(PeriodKind::Week, PeriodOffset::new(2))),
            (ymd(2024, 2, 26), ymd(2024, 3, 3))
        );
        assert_eq!(
            resolver.format_label(PeriodKind::Week, PeriodOffset::CURRENT, Locale::en_US),
            "Mar 11 – Mar 17"
        );
    }

    #[test]
    fn sunday_week_start_is_honoured_both_ways() {
        let resolver = leap_day_resolver().with_week_start(Weekday::Sun);
        let (start, end) = bounds(resolver.resolve_range(PeriodKind::Week, PeriodOffset::CURRENT));
        assert_eq!((start, end), (ymd(2024, 3, 10), ymd(2024, 3, 16)));
        // Sunday 10th is this week under a Sunday start, last week under Monday.
        assert_eq!(resolver.offset_for_date(PeriodKind::Week, ymd(2024, 3, 10)).value(), 0);
        assert_eq!(
            leap_day_resolver().offset_for_date(PeriodKind::Week, ymd(2024, 3, 10)).value(),
            1
        );
    }

    #[test]
    fn quarters_roll_over_years() {
        let resolver = leap_day_resolver();
        assert_eq!(
            bounds(resolver.resolve_range(PeriodKind::Quarter, PeriodOffset::CURRENT)),
            (ymd(2024, 1, 1), ymd(2024, 3, 31))
        );
        assert_eq!(
            bounds(resolver.resolve_range(PeriodKind::Quarter, PeriodOffset::new(1))),
            (ymd(2023, 10, 1), ymd(2023, 12, 31))
        );
        assert_eq!(
            bounds(resolver.resolve_range(PeriodKind::Quarter, PeriodOffset::new(3))),
            (ymd(2023, 4, 1), ymd(2023, 6, 30))
        );
        assert_eq!(
            resolver.format_label(PeriodKind::Quarter, PeriodOffset::new(1), Locale::en_US),
            "2023 Q4"
        );
    }

    #[test]
    fn years_are_calendar_years() {
        let resolver = leap_day_resolver();
        assert_eq!(
            bounds(resolver.resolve_range(PeriodKind::Year, PeriodOffset::new(2))),
            (ymd(2022, 1, 1), ymd(2022, 12, 31))
        );
        assert_eq!(
            resolver.format_label(PeriodKind::Year, PeriodOffset::new(2), Locale::en_US),
            "2022"
        );
    }

    #[test]
    fn month_label_follows_locale() {
        let resolver = leap_day_resolver();
        assert_eq!(
            resolver.format_label(PeriodKind::Month, PeriodOffset::CURRENT, Locale::fr_FR),
            "mars 2024"
        );
    }

    #[test]
    fn ranges_are_ordered_and_non_overlapping() {
        for today in [ymd(2024, 3, 15), ymd(2023, 1, 1), ymd(2020, 12, 31), ymd(2024, 2, 29)] {
            let resolver = PeriodResolver::new(today);
            for kind in bounded_kinds() {
                for offset in 0..30 {
                    let (start, end) = bounds(resolver.resolve_range(kind, PeriodOffset::new(offset)));
                    assert!(end >= start, "{kind} -{offset} from {today}");
                    let (_, older_end) =
                        bounds(resolver.resolve_range(kind, PeriodOffset::new(offset + 1)));
                    assert!(older_end < start, "{kind} -{offset} overlaps older period");
                    assert_eq!(older_end.succ_opt(), Some(start), "{kind} leaves a gap");
                }
            }
        }
    }

    #[test]
    fn offset_for_date_round_trips() {
        let resolver = leap_day_resolver();
        let mut day = resolver.today();
        for _ in 0..800 {
            for kind in PeriodKind::iter() {
                let offset = resolver.offset_for_date(kind, day);
                assert!(
                    resolver.resolve_range(kind, offset).contains(day),
                    "{day} not inside {kind} {offset}"
                );
                if offset.value() > 0 {
                    let newer = PeriodOffset::new(offset.value() - 1);
                    assert!(!resolver.resolve_range(kind, newer).contains(day));
                }
            }
            day = day.pred_opt().unwrap();
        }
    }

    #[test]
    fn offset_for_date_is_monotonic_into_the_past() {
        let resolver = PeriodResolver::new(ymd(2025, 7, 4));
        for kind in PeriodKind::iter() {
            let mut previous = 0;
            let mut day = resolver.today();
            for _ in 0..1000 {
                let offset = resolver.offset_for_date(kind, day).value();
                assert!(offset >= previous);
                previous = offset;
                day = day.pred_opt().unwrap();
            }
        }
    }

    #[test]
    fn future_dates_clamp_to_current_period() {
        let resolver = leap_day_resolver();
        for kind in PeriodKind::iter() {
            assert_eq!(resolver.offset_for_date(kind, ymd(2030, 1, 1)), PeriodOffset::CURRENT);
        }
    }

    #[test]
    fn select_kind_aligns_to_latest_data() {
        let resolver = leap_day_resolver();
        let latest = Some(ymd(2024, 1, 20));
        let month = resolver.select_kind(PeriodKind::Month, latest);
        assert_eq!(month.offset().value(), 2);
        assert!(resolver.resolve(month).contains(ymd(2024, 1, 20)));

        assert_eq!(resolver.select_kind(PeriodKind::Quarter, latest).offset().value(), 0);
        assert_eq!(resolver.select_kind(PeriodKind::All, latest), PeriodState::default());
        assert_eq!(resolver.select_kind(PeriodKind::Year, None).offset().value(), 0);
    }

    #[test]
    fn huge_offsets_saturate_without_panicking() {
        let resolver = leap_day_resolver();
        for kind in bounded_kinds() {
            let (start, end) = bounds(resolver.resolve_range(kind, PeriodOffset::new(u32::MAX)));
            assert!(end >= start);
        }
    }

    #[test]
    fn unknown_locale_falls_back() {
        assert_eq!(parse_locale("fr-FR"), Locale::fr_FR);
        assert_eq!(parse_locale("xx_YY"), CALENDAR.default_locale);
    }
}
