use std::collections::HashMap;

use itertools::{Itertools, MinMaxResult};

use crate::{
    config::HEATMAP,
    domain::{CellShade, HeatmapCell, LocalHourWindow},
    utils::safe_ratio,
};

#[cfg(debug_assertions)]
use crate::config::DF;

const HOURS: i64 = HEATMAP.hours_in_day as i64;

/// Whole-hour shift used for indexing. Half-hour zones round to the nearest hour.
#[inline]
fn shift_hours(offset_hours: f64) -> i64 {
    if offset_hours.is_finite() {
        offset_hours.round() as i64
    } else {
        0
    }
}

pub fn to_local_hour(hour_utc: u8, offset_hours: f64) -> u8 {
    (hour_utc as i64 + shift_hours(offset_hours)).rem_euclid(HOURS) as u8
}

pub fn to_utc_hour(local_hour: u8, offset_hours: f64) -> u8 {
    (local_hour as i64 - shift_hours(offset_hours)).rem_euclid(HOURS) as u8
}

/// Cells that land on the 7x24 grid.
fn placeable(cells: &[HeatmapCell]) -> impl Iterator<Item = &HeatmapCell> {
    cells.iter().filter(|cell| cell.in_range())
}

/// Smallest contiguous run of local hours covering every cell, padded by one hour each side.
pub fn compute_window(cells: &[HeatmapCell], offset_hours: f64) -> LocalHourWindow {
    let last_hour = HEATMAP.hours_in_day - 1;
    match placeable(cells)
        .map(|cell| to_local_hour(cell.hour_utc, offset_hours))
        .minmax()
    {
        MinMaxResult::NoElements => LocalHourWindow::EMPTY,
        MinMaxResult::OneElement(hour) => LocalHourWindow::new(
            hour.saturating_sub(HEATMAP.padding_hours),
            (hour + HEATMAP.padding_hours).min(last_hour),
        ),
        MinMaxResult::MinMax(min, max) => LocalHourWindow::new(
            min.saturating_sub(HEATMAP.padding_hours),
            (max + HEATMAP.padding_hours).min(last_hour),
        ),
    }
}

/// O(1) access to cells by their UTC key.
#[derive(Debug, Clone, Default)]
pub struct HeatmapLookup {
    cells: HashMap<(u8, u8), HeatmapCell>,
}

impl HeatmapLookup {
    pub fn get(&self, day_of_week: u8, hour_utc: u8) -> Option<&HeatmapCell> {
        self.cells.get(&(day_of_week, hour_utc))
    }

    /// Looks up the cell shown at a local-hour column.
    pub fn get_local(&self, day_of_week: u8, local_hour: u8, offset_hours: f64) -> Option<&HeatmapCell> {
        self.get(day_of_week, to_utc_hour(local_hour, offset_hours))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Indexes cells by `(day_of_week, hour_utc)`. The server guarantees one cell per key;
/// should a duplicate slip through the later one wins, nothing is re-aggregated.
pub fn build_lookup(cells: &[HeatmapCell]) -> HeatmapLookup {
    HeatmapLookup {
        cells: placeable(cells).map(|cell| (cell.key(), *cell)).collect(),
    }
}

/// Largest `|avg_metric|` among cells that actually have samples; 0.0 when there are none.
pub fn max_abs_metric(cells: &[HeatmapCell]) -> f64 {
    placeable(cells)
        .filter(|cell| cell.has_data())
        .map(|cell| cell.avg_metric.abs())
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Colour alpha in `[min_alpha, 1.0]`, growing with `|avg_metric|` relative to the max.
pub fn intensity(cell: &HeatmapCell, max_abs_metric: f64) -> f64 {
    let ratio = safe_ratio(cell.avg_metric.abs(), max_abs_metric);
    let ratio = if ratio.is_finite() { ratio.min(1.0) } else { 0.0 };
    HEATMAP.min_alpha + HEATMAP.alpha_span * ratio
}

pub fn shade(cell: &HeatmapCell, max_abs_metric: f64) -> CellShade {
    if !cell.has_data() {
        return CellShade::NoData;
    }
    let alpha = intensity(cell, max_abs_metric);
    if cell.avg_metric >= 0.0 {
        CellShade::Profit(alpha)
    } else {
        CellShade::Loss(alpha)
    }
}

/// One square of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSlot {
    pub day_of_week: u8,
    pub local_hour: u8,
    pub hour_utc: u8,
    pub cell: Option<HeatmapCell>,
    pub shade: CellShade,
}

/// Display-ready heatmap: 7 day rows by the window's local-hour columns.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub offset_hours: f64,
    pub window: LocalHourWindow,
    pub max_abs_metric: f64,
    pub rows: Vec<Vec<GridSlot>>,
}

impl HeatmapGrid {
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn slot(&self, day_of_week: u8, local_hour: u8) -> Option<&GridSlot> {
        let min = self.window.min_hour()?;
        if !self.window.contains(local_hour) {
            return None;
        }
        self.rows
            .get(day_of_week as usize)?
            .get((local_hour - min) as usize)
    }
}

pub fn build_grid(cells: &[HeatmapCell], offset_hours: f64) -> HeatmapGrid {
    let dropped = cells.len() - placeable(cells).count();
    if dropped > 0 {
        log::warn!("Ignoring {} heatmap cells outside the 7x24 grid", dropped);
    }

    let window = compute_window(cells, offset_hours);
    let lookup = build_lookup(cells);
    let max_abs = max_abs_metric(cells);

    let rows = if window.is_empty() {
        Vec::new()
    } else {
        (0..7u8)
            .map(|day| {
                window
                    .hours()
                    .map(|local_hour| {
                        let hour_utc = to_utc_hour(local_hour, offset_hours);
                        let cell = lookup.get(day, hour_utc).copied();
                        GridSlot {
                            day_of_week: day,
                            local_hour,
                            hour_utc,
                            cell,
                            shade: cell.map_or(CellShade::NoData, |c| shade(&c, max_abs)),
                        }
                    })
                    .collect()
            })
            .collect()
    };

    #[cfg(debug_assertions)]
    if DF.log_heatmap {
        log::info!(
            "HEATMAP: {} cells, offset {:+.1}h -> window {:?}..={:?}, max |metric| {:.2}",
            cells.len(),
            offset_hours,
            window.min_hour(),
            window.max_hour(),
            max_abs
        );
    }

    HeatmapGrid {
        offset_hours,
        window,
        max_abs_metric: max_abs,
        rows,
    }
}
