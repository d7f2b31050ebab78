use serde::{Deserialize, Serialize};

/// Production — one manufacturing batch with its cost breakdown and
/// output count.
///
/// Serializes in camelCase to match the `gr_productions` wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Production {
    /// Ledger-assigned integer id, immutable after creation.
    #[serde(default)]
    pub id: i64,

    /// Batch name (e.g. "Produto A - Lote 01"). Required non-empty.
    pub name: String,

    /// ISO-8601 calendar date (`YYYY-MM-DD`). Required.
    pub date: String,

    #[serde(default)]
    pub material_cost: f64,

    #[serde(default)]
    pub labor_cost: f64,

    #[serde(default)]
    pub other_cost: f64,

    /// Units that came out of the batch.
    #[serde(default)]
    pub units_produced: u64,
}

impl Production {
    /// Batch cost — the three cost fields summed. Derived, never stored.
    pub fn total_cost(&self) -> f64 {
        self.material_cost + self.labor_cost + self.other_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_json_roundtrip() {
        let p = Production {
            id: 1,
            name: "Produto A - Lote 01".into(),
            date: "2025-11-01".into(),
            material_cost: 420.0,
            labor_cost: 300.0,
            other_cost: 50.0,
            units_produced: 100,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"materialCost\":420.0"));
        assert!(json.contains("\"unitsProduced\":100"));
        let back: Production = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn total_cost_sums_the_three_fields() {
        let p = Production {
            id: 1,
            name: "Lote".into(),
            date: "2025-11-01".into(),
            material_cost: 420.0,
            labor_cost: 300.0,
            other_cost: 50.0,
            units_produced: 100,
        };
        assert_eq!(p.total_cost(), 770.0);
    }

    #[test]
    fn missing_costs_decode_as_zero() {
        let p: Production =
            serde_json::from_str(r#"{"id":9,"name":"Lote","date":"2025-01-01"}"#).unwrap();
        assert_eq!(p.total_cost(), 0.0);
        assert_eq!(p.units_produced, 0);
    }
}
