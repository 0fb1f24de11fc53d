use {
    chrono::{DateTime, NaiveDate, Utc},
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
    strum_macros::EnumIter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TradeDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(Self::Long),
            "short" | "sell" => Ok(Self::Short),
            _ => Err(()),
        }
    }
}

/// A single closed (or still open) journal entry, as stored by the journal source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: String,
    pub symbol: String,
    pub direction: TradeDirection,
    pub strategy_type: String,
    pub score_grade: String,
    pub asset_type: String,
    pub opened_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    pub pnl: f64,
    #[serde(default)]
    pub r_multiple: Option<f64>,
}

impl TradeRecord {
    /// Calendar day the trade is bucketed under (UTC, matching the server's aggregation).
    #[inline]
    pub fn trade_date(&self) -> NaiveDate {
        self.opened_at.date_naive()
    }

    #[inline]
    pub fn is_win(&self) -> bool {
        self.pnl > 0.0
    }

    pub fn hold_ms(&self) -> Option<i64> {
        self.closed_at.map(|closed| (closed - self.opened_at).num_milliseconds())
    }
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {} pnl={:.2}",
            self.id,
            self.symbol,
            self.direction,
            self.opened_at.format("%Y-%m-%d %H:%M"),
            self.pnl
        )
    }
}
