//! Production ledger — the CRUD surface over [`Production`] records.
//! Mirrors the material registry contract.

use chrono::NaiveDate;

use recursos_core::{parse_count_field, parse_decimal_field, Confirmation, ServiceError};

use super::{next_id, InventoryService, PRODUCTIONS_KEY};
use crate::forms::ProductionForm;
use crate::model::Production;

impl InventoryService {
    /// Create or update a production batch from a form submission.
    ///
    /// Name and date are required; the date must be a real ISO calendar
    /// date. Same insert/replace and persistence behavior as
    /// [`InventoryService::save_material`].
    pub fn save_production(&self, form: ProductionForm) -> Result<Production, ServiceError> {
        let name = form.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::Validation(
                "production name is required".into(),
            ));
        }
        let date = form.date.trim().to_string();
        if date.is_empty() {
            return Err(ServiceError::Validation(
                "production date is required".into(),
            ));
        }
        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            return Err(ServiceError::Validation(format!(
                "date must be an ISO calendar date (YYYY-MM-DD), got '{date}'"
            )));
        }
        let material_cost = parse_decimal_field("material cost", &form.material_cost)?;
        let labor_cost = parse_decimal_field("labor cost", &form.labor_cost)?;
        let other_cost = parse_decimal_field("other cost", &form.other_cost)?;
        let units_produced = parse_count_field("units produced", &form.units_produced)?;

        let mut productions = self.productions.write().unwrap();
        let record = match form.id {
            Some(id) => {
                let slot = productions
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| ServiceError::NotFound(format!("production {id}")))?;
                *slot = Production {
                    id,
                    name,
                    date,
                    material_cost,
                    labor_cost,
                    other_cost,
                    units_produced,
                };
                slot.clone()
            }
            None => {
                let record = Production {
                    id: next_id(productions.iter().map(|p| p.id)),
                    name,
                    date,
                    material_cost,
                    labor_cost,
                    other_cost,
                    units_produced,
                };
                productions.insert(0, record.clone());
                record
            }
        };

        self.persist(PRODUCTIONS_KEY, &productions);
        Ok(record)
    }

    /// Remove a production batch by id, behind the host's confirmation
    /// prompt. Same no-op rules as
    /// [`InventoryService::remove_material`].
    pub fn remove_production(
        &self,
        id: i64,
        confirm: Confirmation,
    ) -> Result<bool, ServiceError> {
        if !confirm.is_confirmed() {
            return Ok(false);
        }
        let mut productions = self.productions.write().unwrap();
        let before = productions.len();
        productions.retain(|p| p.id != id);
        if productions.len() == before {
            return Ok(false);
        }
        self.persist(PRODUCTIONS_KEY, &productions);
        Ok(true)
    }

    /// Σ (material + labor + other) cost over the whole ledger.
    pub fn total_production_cost(&self) -> f64 {
        self.productions
            .read()
            .unwrap()
            .iter()
            .map(Production::total_cost)
            .sum()
    }
}
