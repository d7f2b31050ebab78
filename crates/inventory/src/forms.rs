use crate::model::{Material, Production};

/// Raw material form submission. Numeric fields arrive as the text typed
/// into the input widget; parsing and validation happen in
/// [`crate::service::InventoryService::save_material`].
///
/// `id` is `None` for a new record and carries the record's id when the
/// form was prefilled for editing.
#[derive(Debug, Clone, Default)]
pub struct MaterialForm {
    pub id: Option<i64>,
    pub name: String,
    pub unit: String,
    pub unit_price: String,
    pub quantity_on_hand: String,
}

impl From<&Material> for MaterialForm {
    /// Prefill an edit form from a listed record.
    fn from(m: &Material) -> Self {
        Self {
            id: Some(m.id),
            name: m.name.clone(),
            unit: m.unit.clone(),
            unit_price: m.unit_price.to_string(),
            quantity_on_hand: m.quantity_on_hand.to_string(),
        }
    }
}

/// Raw production form submission, mirroring [`MaterialForm`].
#[derive(Debug, Clone, Default)]
pub struct ProductionForm {
    pub id: Option<i64>,
    pub name: String,
    pub date: String,
    pub material_cost: String,
    pub labor_cost: String,
    pub other_cost: String,
    pub units_produced: String,
}

impl From<&Production> for ProductionForm {
    fn from(p: &Production) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            date: p.date.clone(),
            material_cost: p.material_cost.to_string(),
            labor_cost: p.labor_cost.to_string(),
            other_cost: p.other_cost.to_string(),
            units_produced: p.units_produced.to_string(),
        }
    }
}
