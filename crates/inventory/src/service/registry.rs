//! Material registry — the CRUD surface over [`Material`] records.

use recursos_core::{parse_decimal_field, Confirmation, ServiceError};

use super::{next_id, InventoryService, MATERIALS_KEY};
use crate::forms::MaterialForm;
use crate::model::Material;

impl InventoryService {
    /// Create or update a material from a form submission.
    ///
    /// A form without an id becomes a new record, prepended so the
    /// registry stays newest-first. A form carrying an id replaces that
    /// record in place; submitting an unknown id is a `NotFound` error.
    /// The full registry is persisted afterwards.
    pub fn save_material(&self, form: MaterialForm) -> Result<Material, ServiceError> {
        let name = form.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::Validation("material name is required".into()));
        }
        let unit_price = parse_decimal_field("unit price", &form.unit_price)?;
        let quantity_on_hand = parse_decimal_field("quantity on hand", &form.quantity_on_hand)?;
        let unit = form.unit.trim().to_string();

        let mut materials = self.materials.write().unwrap();
        let record = match form.id {
            Some(id) => {
                let slot = materials
                    .iter_mut()
                    .find(|m| m.id == id)
                    .ok_or_else(|| ServiceError::NotFound(format!("material {id}")))?;
                *slot = Material {
                    id,
                    name,
                    unit,
                    unit_price,
                    quantity_on_hand,
                };
                slot.clone()
            }
            None => {
                let record = Material {
                    id: next_id(materials.iter().map(|m| m.id)),
                    name,
                    unit,
                    unit_price,
                    quantity_on_hand,
                };
                materials.insert(0, record.clone());
                record
            }
        };

        self.persist(MATERIALS_KEY, &materials);
        Ok(record)
    }

    /// Remove a material by id, behind the host's confirmation prompt.
    ///
    /// Returns whether a record was actually removed; a declined prompt
    /// or an unknown id leaves the registry unchanged.
    pub fn remove_material(
        &self,
        id: i64,
        confirm: Confirmation,
    ) -> Result<bool, ServiceError> {
        if !confirm.is_confirmed() {
            return Ok(false);
        }
        let mut materials = self.materials.write().unwrap();
        let before = materials.len();
        materials.retain(|m| m.id != id);
        if materials.len() == before {
            return Ok(false);
        }
        self.persist(MATERIALS_KEY, &materials);
        Ok(true)
    }

    /// Σ unit price × quantity on hand over the whole registry.
    pub fn total_material_value(&self) -> f64 {
        self.materials.read().unwrap().iter().map(Material::value).sum()
    }
}
