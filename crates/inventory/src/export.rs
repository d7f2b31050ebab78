//! CSV export of both collections into one text document.
//!
//! Two sections, each a label line, a header line, then one row per
//! record in in-memory (newest-first) order, with a blank line between
//! sections. Fields are quoted per RFC 4180 only when they contain the
//! delimiter, a quote, or a line break, so plain rows stay byte-stable.

use csv::Writer;

use recursos_core::ServiceError;

use crate::model::{Material, Production};

/// Download filename the host should use.
pub const EXPORT_FILENAME: &str = "gestao_recursos_export.csv";
/// MIME type of the exported document.
pub const EXPORT_MIME: &str = "text/csv";

const MATERIALS_LABEL: &str = "--Materials--";
const PRODUCTIONS_LABEL: &str = "--Productions--";

const MATERIAL_HEADER: [&str; 5] = ["id", "name", "unit", "unitPrice", "quantityOnHand"];
const PRODUCTION_HEADER: [&str; 7] = [
    "id",
    "name",
    "date",
    "materialCost",
    "laborCost",
    "otherCost",
    "unitsProduced",
];

/// Serialize both collections to the two-section CSV document.
pub fn export_csv(
    materials: &[Material],
    productions: &[Production],
) -> Result<String, ServiceError> {
    let materials_section = section(
        &MATERIAL_HEADER,
        materials.iter().map(|m| {
            vec![
                m.id.to_string(),
                m.name.clone(),
                m.unit.clone(),
                fmt_number(m.unit_price),
                fmt_number(m.quantity_on_hand),
            ]
        }),
    )?;
    let productions_section = section(
        &PRODUCTION_HEADER,
        productions.iter().map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.date.clone(),
                fmt_number(p.material_cost),
                fmt_number(p.labor_cost),
                fmt_number(p.other_cost),
                p.units_produced.to_string(),
            ]
        }),
    )?;

    Ok(format!(
        "{MATERIALS_LABEL}\n{materials_section}\n{PRODUCTIONS_LABEL}\n{productions_section}"
    ))
}

fn section(
    header: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<String, ServiceError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(header).map_err(internal)?;
    for row in rows {
        writer.write_record(&row).map_err(internal)?;
    }
    let buf = writer
        .into_inner()
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ServiceError::Internal(e.to_string()))
}

fn internal(e: csv::Error) -> ServiceError {
    ServiceError::Internal(e.to_string())
}

/// Numbers print the way they were entered: no forced decimals, so `5.2`
/// stays `5.2` and `200` stays `200`.
fn fmt_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn export_matches_the_documented_shape() {
        let csv = export_csv(&sample::materials(), &sample::productions()).unwrap();
        let expected = "\
--Materials--
id,name,unit,unitPrice,quantityOnHand
1,Aço,kg,5.2,200
2,Parafuso,un,0.12,5000

--Productions--
id,name,date,materialCost,laborCost,otherCost,unitsProduced
1,Produto A - Lote 01,2025-11-01,420,300,50,100
2,Produto B - Lote 02,2025-11-15,120,80,20,40
";
        assert_eq!(csv, expected);
    }

    #[test]
    fn empty_collections_still_emit_headers() {
        let csv = export_csv(&[], &[]).unwrap();
        assert_eq!(
            csv,
            "--Materials--\nid,name,unit,unitPrice,quantityOnHand\n\n\
             --Productions--\nid,name,date,materialCost,laborCost,otherCost,unitsProduced\n"
        );
    }

    #[test]
    fn embedded_comma_is_quoted_not_corrupting() {
        let materials = vec![Material {
            id: 3,
            name: "Chapa, galvanizada".into(),
            unit: "m2".into(),
            unit_price: 30.0,
            quantity_on_hand: 4.0,
        }];
        let csv = export_csv(&materials, &[]).unwrap();
        assert!(csv.contains("3,\"Chapa, galvanizada\",m2,30,4\n"));
    }
}
