//! Chart-ready series and dashboard aggregates. Everything here is pure
//! and recomputed from a collection snapshot on every read — no cached
//! or incremental state.

use serde::Serialize;

use crate::model::{Material, Production};

/// Label used for the single placeholder point of an empty cost series.
pub const NO_DATA_LABEL: &str = "sem dados";

/// One labeled value of a report series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Dashboard summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_material_value: f64,
    pub total_production_cost: f64,
    pub production_count: usize,
}

/// Cost per batch, oldest batch first.
///
/// The ledger is stored newest-first, so the series walks it in reverse.
/// Points are labeled by the batch date string. An empty ledger yields a
/// single zero-valued placeholder so a line chart still has something to
/// draw.
pub fn cost_over_batches(productions: &[Production]) -> Vec<SeriesPoint> {
    if productions.is_empty() {
        return vec![SeriesPoint {
            label: NO_DATA_LABEL.into(),
            value: 0.0,
        }];
    }
    productions
        .iter()
        .rev()
        .map(|p| SeriesPoint {
            label: p.date.clone(),
            value: p.total_cost(),
        })
        .collect()
}

/// Per-material stock value, used as proportions of a whole (pie-style
/// breakdown). An empty registry yields an empty series.
pub fn material_value_distribution(materials: &[Material]) -> Vec<SeriesPoint> {
    materials
        .iter()
        .map(|m| SeriesPoint {
            label: m.name.clone(),
            value: m.value(),
        })
        .collect()
}

/// Fixed two-decimal money rendering for display totals.
pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn cost_series_is_oldest_first() {
        let series = cost_over_batches(&sample::productions());
        assert_eq!(series.len(), 2);
        // The ledger stores newest-first, so the last element is the
        // oldest batch and leads the series. Insertion order drives this,
        // not the date strings.
        assert_eq!(series[0].label, "2025-11-15");
        assert_eq!(series[0].value, 220.0);
        assert_eq!(series[1].label, "2025-11-01");
        assert_eq!(series[1].value, 770.0);
    }

    #[test]
    fn empty_ledger_yields_placeholder_point() {
        let series = cost_over_batches(&[]);
        assert_eq!(
            series,
            vec![SeriesPoint {
                label: NO_DATA_LABEL.into(),
                value: 0.0
            }]
        );
    }

    #[test]
    fn distribution_has_one_entry_per_material() {
        let series = material_value_distribution(&sample::materials());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Aço");
        assert_eq!(series[0].value, 1040.0);
        assert_eq!(series[1].label, "Parafuso");
        assert_eq!(series[1].value, 600.0);
    }

    #[test]
    fn empty_registry_yields_empty_distribution() {
        assert!(material_value_distribution(&[]).is_empty());
    }

    #[test]
    fn money_renders_two_decimals() {
        assert_eq!(format_money(1040.0), "1040.00");
        assert_eq!(format_money(5.2), "5.20");
    }
}
