//! Gestão de Recursos — inventory and production-cost tracking core.
//!
//! Two parallel CRUD collections share one pattern: the **material
//! registry** (stock-keeping units with price and quantity) and the
//! **production ledger** (manufacturing batches with a cost breakdown).
//! [`service::InventoryService`] owns both collections in memory, funnels
//! every mutation through validated form submissions, and mirrors each
//! collection whole into a [`recursos_kv::KVStore`] after every change.
//! Reports and CSV export are pure functions over collection snapshots.

pub mod export;
pub mod forms;
pub mod model;
pub mod report;
pub mod sample;
pub mod service;

pub use forms::{MaterialForm, ProductionForm};
pub use model::{Material, Production};
pub use report::{SeriesPoint, Summary};
pub use service::{InventoryService, MATERIALS_KEY, PRODUCTIONS_KEY};
