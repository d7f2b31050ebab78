use serde::{Deserialize, Serialize};

/// Material — a stock-keeping unit with price and quantity.
///
/// Field names serialize in camelCase so the persisted JSON matches the
/// `gr_materials` wire shape. Numeric fields default to zero on decode;
/// data written by older copies may omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Registry-assigned integer id, immutable after creation.
    #[serde(default)]
    pub id: i64,

    /// Display name. Required non-empty.
    pub name: String,

    /// Unit label shown next to quantities (e.g. "kg", "un").
    #[serde(default)]
    pub unit: String,

    /// Price per unit, non-negative.
    #[serde(default)]
    pub unit_price: f64,

    /// Stock currently on hand, non-negative.
    #[serde(default)]
    pub quantity_on_hand: f64,
}

impl Material {
    /// Stock value — unit price times quantity on hand. Derived, never
    /// stored.
    pub fn value(&self) -> f64 {
        self.unit_price * self.quantity_on_hand
    }
}
