//! Built-in sample dataset, substituted when a stored collection is
//! absent or fails to decode.

use crate::model::{Material, Production};

pub fn materials() -> Vec<Material> {
    vec![
        Material {
            id: 1,
            name: "Aço".into(),
            unit: "kg".into(),
            unit_price: 5.2,
            quantity_on_hand: 200.0,
        },
        Material {
            id: 2,
            name: "Parafuso".into(),
            unit: "un".into(),
            unit_price: 0.12,
            quantity_on_hand: 5000.0,
        },
    ]
}

pub fn productions() -> Vec<Production> {
    vec![
        Production {
            id: 1,
            name: "Produto A - Lote 01".into(),
            date: "2025-11-01".into(),
            material_cost: 420.0,
            labor_cost: 300.0,
            other_cost: 50.0,
            units_produced: 100,
        },
        Production {
            id: 2,
            name: "Produto B - Lote 02".into(),
            date: "2025-11-15".into(),
            material_cost: 120.0,
            labor_cost: 80.0,
            other_cost: 20.0,
            units_produced: 40,
        },
    ]
}
