use {
    chrono::NaiveDate,
    itertools::Itertools,
    serde_json::Value,
    std::{collections::BTreeMap, fmt},
    strum_macros::EnumIter,
};

use crate::{domain::TradeDirection, utils::format_iso_date};

/// Query keys understood by the paginated trade list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum FilterKey {
    Symbol,
    Direction,
    StrategyType,
    ScoreGrade,
    AssetType,
    Hour,
    DateStart,
    DateEnd,
}

impl FilterKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Direction => "direction",
            Self::StrategyType => "strategy_type",
            Self::ScoreGrade => "score_grade",
            Self::AssetType => "asset_type",
            Self::Hour => "hour",
            Self::DateStart => "date_start",
            Self::DateEnd => "date_end",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Direction(TradeDirection),
    Hour(u8),
    Date(NaiveDate),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Direction(dir) => write!(f, "{}", dir),
            Self::Hour(hour) => write!(f, "{}", hour),
            Self::Date(date) => write!(f, "{}", format_iso_date(*date)),
        }
    }
}

/// Query descriptor for the detail list behind an aggregate. Absent keys are unconstrained.
/// Built once per interaction and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrillDownFilter {
    entries: BTreeMap<FilterKey, FilterValue>,
}

impl DrillDownFilter {
    pub(crate) fn from_entries(entries: impl IntoIterator<Item = (FilterKey, FilterValue)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: FilterKey) -> Option<&FilterValue> {
        self.entries.get(&key)
    }

    pub fn contains_key(&self, key: FilterKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = FilterKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn text(&self, key: FilterKey) -> Option<&str> {
        match self.entries.get(&key) {
            Some(FilterValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn date(&self, key: FilterKey) -> Option<NaiveDate> {
        match self.entries.get(&key) {
            Some(FilterValue::Date(date)) => Some(*date),
            _ => None,
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.to_string()))
            .collect()
    }

    /// `key=value&key=value`, values percent-encoded where needed.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_query_value(&value.to_string())))
            .join("&")
    }
}

impl fmt::Display for DrillDownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "(unfiltered)");
        }
        write!(
            f,
            "{}",
            self.entries
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .join(", ")
        )
    }
}

fn encode_query_value(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

/// What the user clicked on an aggregated chart, by payload shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartInteraction {
    Symbol(String),
    Direction(TradeDirection),
    Strategy(String),
    Grade(String),
    AssetType(String),
    Hour(u8),
    /// Drawdown or time-span selection.
    Span { start: NaiveDate, end: NaiveDate },
    /// Nothing identifiable in the payload; drills into everything.
    Unidentified,
}

impl ChartInteraction {
    /// Reads a raw chart click payload (as emitted by the chart layer) and picks the
    /// first identifier it recognises. Unknown shapes become `Unidentified`.
    pub fn from_payload(payload: &Value) -> Self {
        let text = |field: &str| {
            payload
                .get(field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let date = |field: &str| {
            payload
                .get(field)
                .and_then(Value::as_str)
                .and_then(|s| NaiveDate::parse_from_str(s.get(..10).unwrap_or(s), "%Y-%m-%d").ok())
        };

        if let Some(symbol) = text("symbol") {
            return Self::Symbol(symbol);
        }
        if let Some(direction) = text("direction").and_then(|d| d.parse().ok()) {
            return Self::Direction(direction);
        }
        if let Some(strategy) = text("strategy_type").or_else(|| text("strategy")) {
            return Self::Strategy(strategy);
        }
        if let Some(grade) = text("score_grade").or_else(|| text("grade")) {
            return Self::Grade(grade);
        }
        if let Some(asset) = text("asset_type") {
            return Self::AssetType(asset);
        }
        if let Some(hour) = payload.get("hour").and_then(Value::as_f64)
            && hour.fract() == 0.0
            && (0.0..24.0).contains(&hour)
        {
            return Self::Hour(hour as u8);
        }
        if let (Some(start), Some(end)) = (date("start"), date("end")) {
            let (start, end) = if start <= end { (start, end) } else { (end, start) };
            return Self::Span { start, end };
        }
        Self::Unidentified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_shapes_map_to_interactions() {
        assert_eq!(
            ChartInteraction::from_payload(&json!({"symbol": "BTCUSDT", "pnl": 10.0})),
            ChartInteraction::Symbol("BTCUSDT".into())
        );
        assert_eq!(
            ChartInteraction::from_payload(&json!({"direction": "Short"})),
            ChartInteraction::Direction(TradeDirection::Short)
        );
        assert_eq!(
            ChartInteraction::from_payload(&json!({"strategy": "breakout"})),
            ChartInteraction::Strategy("breakout".into())
        );
        assert_eq!(
            ChartInteraction::from_payload(&json!({"grade": "A"})),
            ChartInteraction::Grade("A".into())
        );
        assert_eq!(
            ChartInteraction::from_payload(&json!({"asset_type": "forex"})),
            ChartInteraction::AssetType("forex".into())
        );
        assert_eq!(
            ChartInteraction::from_payload(&json!({"hour": 14})),
            ChartInteraction::Hour(14)
        );
    }

    #[test]
    fn hour_payload_accepts_whole_floats() {
        assert_eq!(
            ChartInteraction::from_payload(&json!({"hour": 14.0})),
            ChartInteraction::Hour(14)
        );
        assert_eq!(
            ChartInteraction::from_payload(&json!({"hour": 0.0})),
            ChartInteraction::Hour(0)
        );
        for hour in [json!(14.5), json!(-1.0), json!(24.0), json!(-1)] {
            assert_eq!(
                ChartInteraction::from_payload(&json!({ "hour": hour })),
                ChartInteraction::Unidentified,
                "hour {}",
                hour
            );
        }
    }

    #[test]
    fn span_payload_accepts_timestamps_and_orders_bounds() {
        let payload = json!({"start": "2024-03-09T10:00:00Z", "end": "2024-03-02"});
        assert_eq!(
            ChartInteraction::from_payload(&payload),
            ChartInteraction::Span {
                start: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            }
        );
    }

    #[test]
    fn junk_payloads_are_unidentified() {
        for payload in [
            json!({}),
            json!(null),
            json!({"symbol": "  "}),
            json!({"hour": 31}),
            json!({"start": "2024-03-01"}),
            json!({"direction": "sideways"}),
        ] {
            assert_eq!(
                ChartInteraction::from_payload(&payload),
                ChartInteraction::Unidentified,
                "payload {}",
                payload
            );
        }
    }

    #[test]
    fn query_string_is_encoded_and_ordered() {
        let filter = DrillDownFilter::from_entries([
            (FilterKey::DateEnd, FilterValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())),
            (FilterKey::Symbol, FilterValue::Text("ES 03-24".into())),
        ]);
        assert_eq!(filter.to_query_string(), "symbol=ES%2003-24&date_end=2024-02-29");
        assert_eq!(filter.len(), 2);
        assert!(DrillDownFilter::default().to_query_string().is_empty());
    }
}
