use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
    strum_macros::EnumIter,
};

use crate::utils::format_iso_date;

/// Granularity of the relative time window the dashboard is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    #[default]
    All,
    Week,
    Month,
    Quarter,
    Year,
}

impl PeriodKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Quarter => "Quarter",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePeriodKindError(pub String);

impl fmt::Display for ParsePeriodKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown period kind '{}' (expected all, week, month, quarter or year)",
            self.0
        )
    }
}

impl std::error::Error for ParsePeriodKindError {}

impl FromStr for PeriodKind {
    type Err = ParsePeriodKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(ParsePeriodKindError(s.to_string())),
        }
    }
}

/// How many period instances back from "now". Never negative: navigation into the future clamps at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodOffset(u32);

impl PeriodOffset {
    pub const CURRENT: Self = Self(0);

    pub const fn new(val: u32) -> Self {
        Self(val)
    }

    /// Clamps a signed offset (e.g. from date arithmetic) into the valid range.
    pub fn from_signed(val: i64) -> Self {
        Self(val.clamp(0, u32::MAX as i64) as u32)
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn older(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn newer(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for PeriodOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.0)
    }
}

/// Inclusive calendar range. `All` means unbounded; a half-open range cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    All,
    Bounded { start: NaiveDate, end: NaiveDate },
}

impl DateRange {
    pub fn bounded(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(end >= start, "DateRange end {} before start {}", end, start);
        Self::Bounded { start, end }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::All => None,
            Self::Bounded { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            Self::All => None,
            Self::Bounded { end, .. } => Some(*end),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Bounded { start, end } => *start <= date && date <= *end,
        }
    }

    /// `date_start` / `date_end` as ISO-8601 strings; empty for `All`.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::All => Vec::new(),
            Self::Bounded { start, end } => vec![
                ("date_start", format_iso_date(*start)),
                ("date_end", format_iso_date(*end)),
            ],
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Bounded { start, end } => {
                write!(f, "{}..={}", format_iso_date(*start), format_iso_date(*end))
            }
        }
    }
}

/// The page-level period selection. An immutable value: every transition returns a new state,
/// which is handed by value to each chart and query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PeriodState {
    kind: PeriodKind,
    offset: PeriodOffset,
}

impl PeriodState {
    pub fn new(kind: PeriodKind, offset: PeriodOffset) -> Self {
        let offset = if kind == PeriodKind::All {
            PeriodOffset::CURRENT
        } else {
            offset
        };
        Self { kind, offset }
    }

    #[inline]
    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    #[inline]
    pub fn offset(&self) -> PeriodOffset {
        self.offset
    }

    pub fn is_all(&self) -> bool {
        self.kind == PeriodKind::All
    }

    /// One period further into the past.
    pub fn back(self) -> Self {
        Self::new(self.kind, self.offset.older())
    }

    /// One period towards "now", floored at the current period.
    pub fn forward(self) -> Self {
        Self::new(self.kind, self.offset.newer())
    }

    pub fn can_go_forward(&self) -> bool {
        !self.is_all() && self.offset.value() > 0
    }
}

impl fmt::Display for PeriodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_parses_case_insensitively_and_rejects_unknown() {
        assert_eq!("Month".parse::<PeriodKind>().unwrap(), PeriodKind::Month);
        assert_eq!(" year ".parse::<PeriodKind>().unwrap(), PeriodKind::Year);
        assert!("fortnight".parse::<PeriodKind>().is_err());
        for kind in PeriodKind::iter() {
            assert_eq!(kind.as_str().parse::<PeriodKind>().unwrap(), kind);
        }
    }

    #[test]
    fn default_state_is_all_time() {
        let state = PeriodState::default();
        assert_eq!(state.kind(), PeriodKind::All);
        assert_eq!(state.offset(), PeriodOffset::CURRENT);
    }

    #[test]
    fn forward_floors_at_zero() {
        let state = PeriodState::new(PeriodKind::Month, PeriodOffset::new(1));
        let newer = state.forward();
        assert_eq!(newer.offset().value(), 0);
        assert_eq!(newer.forward().offset().value(), 0);
        assert!(!newer.can_go_forward());
        assert_eq!(newer.back().back().offset().value(), 2);
    }

    #[test]
    fn all_never_carries_an_offset() {
        let state = PeriodState::new(PeriodKind::All, PeriodOffset::new(5));
        assert_eq!(state.offset().value(), 0);
        assert_eq!(state.back().offset().value(), 0);
    }

    #[test]
    fn signed_offsets_clamp() {
        assert_eq!(PeriodOffset::from_signed(-3).value(), 0);
        assert_eq!(PeriodOffset::from_signed(i64::MAX).value(), u32::MAX);
    }

    #[test]
    fn range_query_params_are_absent_for_all() {
        assert!(DateRange::All.query_params().is_empty());
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let params = DateRange::bounded(start, end).query_params();
        assert_eq!(
            params,
            vec![
                ("date_start", "2024-02-01".to_string()),
                ("date_end", "2024-02-29".to_string())
            ]
        );
    }
}
