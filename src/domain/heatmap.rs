use serde::{Deserialize, Serialize};

/// One server-aggregated bucket of trading activity, keyed by `(day_of_week, hour_utc)`.
/// `day_of_week` follows the server convention: 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub day_of_week: u8,
    pub hour_utc: u8,
    pub avg_metric: f64,
    pub sample_count: u32,
}

impl HeatmapCell {
    pub fn new(day_of_week: u8, hour_utc: u8, avg_metric: f64, sample_count: u32) -> Self {
        debug_assert!(day_of_week < 7, "day_of_week out of range: {}", day_of_week);
        debug_assert!(hour_utc < 24, "hour_utc out of range: {}", hour_utc);
        Self {
            day_of_week,
            hour_utc,
            avg_metric,
            sample_count,
        }
    }

    #[inline]
    pub fn key(&self) -> (u8, u8) {
        (self.day_of_week, self.hour_utc)
    }

    /// Day and hour both land on the 7x24 grid. Deserialized cells are not checked.
    #[inline]
    pub fn in_range(&self) -> bool {
        self.day_of_week < 7 && self.hour_utc < 24
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.sample_count > 0
    }
}

/// Contiguous ascending run of local hours shown as heatmap columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalHourWindow {
    bounds: Option<(u8, u8)>,
}

impl LocalHourWindow {
    pub const EMPTY: Self = Self { bounds: None };

    pub fn new(min_hour: u8, max_hour: u8) -> Self {
        debug_assert!(min_hour <= max_hour && max_hour < 24);
        Self {
            bounds: Some((min_hour, max_hour)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn min_hour(&self) -> Option<u8> {
        self.bounds.map(|(min, _)| min)
    }

    pub fn max_hour(&self) -> Option<u8> {
        self.bounds.map(|(_, max)| max)
    }

    pub fn len(&self) -> usize {
        self.bounds.map_or(0, |(min, max)| (max - min) as usize + 1)
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.bounds.is_some_and(|(min, max)| (min..=max).contains(&hour))
    }

    pub fn hours(&self) -> impl Iterator<Item = u8> + use<> {
        let (min, max) = self.bounds.unwrap_or((1, 0));
        min..=max
    }
}

/// How a single heatmap square is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellShade {
    /// No cell, or a cell with zero samples. Distinct from a faint profit/loss.
    NoData,
    Profit(f64),
    Loss(f64),
}

impl CellShade {
    pub fn alpha(&self) -> Option<f64> {
        match self {
            Self::NoData => None,
            Self::Profit(a) | Self::Loss(a) => Some(*a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_has_no_hours() {
        let window = LocalHourWindow::EMPTY;
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.hours().count(), 0);
        assert!(!window.contains(0));
    }

    #[test]
    fn window_iterates_inclusive() {
        let window = LocalHourWindow::new(16, 18);
        assert_eq!(window.hours().collect::<Vec<_>>(), vec![16, 17, 18]);
        assert_eq!(window.len(), 3);
        assert!(window.contains(18));
        assert!(!window.contains(19));
    }

    #[test]
    fn cell_deserializes_from_api_shape() {
        let json = r#"{"dayOfWeek":2,"hourUtc":9,"avgMetric":-12.5,"sampleCount":4}"#;
        let cell: HeatmapCell = serde_json::from_str(json).unwrap();
        assert_eq!(cell.key(), (2, 9));
        assert_eq!(cell.avg_metric, -12.5);
        assert!(cell.has_data());
    }
}
