mod ledger;
mod registry;

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use recursos_core::{Confirmation, ServiceError};
use recursos_kv::KVStore;

use crate::export;
use crate::model::{Material, Production};
use crate::report::{self, SeriesPoint, Summary};
use crate::sample;

/// Persistence key for the material registry.
pub const MATERIALS_KEY: &str = "gr_materials";
/// Persistence key for the production ledger.
pub const PRODUCTIONS_KEY: &str = "gr_productions";

/// InventoryService owns both collections and funnels every mutation
/// through the registry and ledger contracts.
///
/// Collections are newest-first. After every successful mutation the full
/// collection is serialized and written to the store; a write failure is
/// logged and otherwise ignored — in-memory state stays the source of
/// truth.
pub struct InventoryService {
    store: Arc<dyn KVStore>,
    materials: RwLock<Vec<Material>>,
    productions: RwLock<Vec<Production>>,
}

impl InventoryService {
    /// Load both collections from the store. A key that is absent or does
    /// not decode falls back to the built-in sample dataset.
    pub fn open(store: Arc<dyn KVStore>) -> Self {
        let materials = load_collection(store.as_ref(), MATERIALS_KEY, sample::materials);
        let productions = load_collection(store.as_ref(), PRODUCTIONS_KEY, sample::productions);
        Self {
            store,
            materials: RwLock::new(materials),
            productions: RwLock::new(productions),
        }
    }

    /// Snapshot of the material registry, newest-first.
    pub fn materials(&self) -> Vec<Material> {
        self.materials.read().unwrap().clone()
    }

    /// Snapshot of the production ledger, newest-first.
    pub fn productions(&self) -> Vec<Production> {
        self.productions.read().unwrap().clone()
    }

    /// Dashboard summary: both totals plus the number of recorded batches.
    pub fn summary(&self) -> Summary {
        Summary {
            total_material_value: self.total_material_value(),
            total_production_cost: self.total_production_cost(),
            production_count: self.productions.read().unwrap().len(),
        }
    }

    /// Cost-over-batches series, oldest batch first.
    pub fn cost_series(&self) -> Vec<SeriesPoint> {
        report::cost_over_batches(&self.productions.read().unwrap())
    }

    /// Material value distribution for the pie breakdown.
    pub fn value_distribution(&self) -> Vec<SeriesPoint> {
        report::material_value_distribution(&self.materials.read().unwrap())
    }

    /// CSV document with both collections (see [`crate::export`]).
    pub fn export_csv(&self) -> Result<String, ServiceError> {
        export::export_csv(
            &self.materials.read().unwrap(),
            &self.productions.read().unwrap(),
        )
    }

    /// Empty both collections and drop their persisted mirrors.
    pub fn clear_all(&self, confirm: Confirmation) -> Result<(), ServiceError> {
        if !confirm.is_confirmed() {
            return Ok(());
        }
        self.materials.write().unwrap().clear();
        self.productions.write().unwrap().clear();
        for key in [MATERIALS_KEY, PRODUCTIONS_KEY] {
            if let Err(e) = self.store.delete(key) {
                warn!(key, error = %e, "failed to delete persisted collection");
            }
        }
        Ok(())
    }

    /// Write a full collection to the store. Best-effort: a failure is
    /// logged, the in-memory collection stays authoritative.
    fn persist<T: Serialize>(&self, key: &str, items: &[T]) {
        let raw = match serde_json::to_vec(items) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize collection");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &raw) {
            warn!(key, error = %e, "failed to persist collection");
        }
    }
}

fn load_collection<T: DeserializeOwned>(
    store: &dyn KVStore,
    key: &str,
    sample: fn() -> Vec<T>,
) -> Vec<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_slice(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key, error = %e, "stored collection is corrupt, using sample data");
                sample()
            }
        },
        Ok(None) => {
            debug!(key, "no stored collection, using sample data");
            sample()
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored collection, using sample data");
            sample()
        }
    }
}

/// Next free id for a collection: one past the largest id in use.
fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |m| m + 1)
}
