use crate::{
    analysis::PeriodResolver,
    domain::{ChartInteraction, DateRange, DrillDownFilter, FilterKey, FilterValue, PeriodState},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Builds the filter for the detail list behind a clicked chart element.
///
/// Each call starts from nothing: earlier drill-downs never leak into the result.
/// Outside "All" the active period's dates are folded in so that drilling into one
/// month's symbol bar lists only that month's trades. A span selection carries its own
/// dates and those take precedence.
pub fn compose(
    interaction: &ChartInteraction,
    period: PeriodState,
    resolver: &PeriodResolver,
) -> DrillDownFilter {
    let entity = match interaction {
        ChartInteraction::Symbol(symbol) => {
            vec![(FilterKey::Symbol, FilterValue::Text(symbol.clone()))]
        }
        ChartInteraction::Direction(direction) => {
            vec![(FilterKey::Direction, FilterValue::Direction(*direction))]
        }
        ChartInteraction::Strategy(strategy) => {
            vec![(FilterKey::StrategyType, FilterValue::Text(strategy.clone()))]
        }
        ChartInteraction::Grade(grade) => {
            vec![(FilterKey::ScoreGrade, FilterValue::Text(grade.clone()))]
        }
        ChartInteraction::AssetType(asset) => {
            vec![(FilterKey::AssetType, FilterValue::Text(asset.clone()))]
        }
        ChartInteraction::Hour(hour) => vec![(FilterKey::Hour, FilterValue::Hour(*hour))],
        ChartInteraction::Span { start, end } => vec![
            (FilterKey::DateStart, FilterValue::Date(*start)),
            (FilterKey::DateEnd, FilterValue::Date(*end)),
        ],
        ChartInteraction::Unidentified => Vec::new(),
    };

    let period_bounds = match (interaction, resolver.resolve(period)) {
        (ChartInteraction::Unidentified | ChartInteraction::Span { .. }, _) => Vec::new(),
        (_, DateRange::All) => Vec::new(),
        (_, DateRange::Bounded { start, end }) => vec![
            (FilterKey::DateStart, FilterValue::Date(start)),
            (FilterKey::DateEnd, FilterValue::Date(end)),
        ],
    };

    let filter = DrillDownFilter::from_entries(entity.into_iter().chain(period_bounds));

    #[cfg(debug_assertions)]
    if DF.log_drill_down {
        log::info!("DRILL-DOWN: {:?} in {} -> {}", interaction, period, filter);
    }
    filter
}
