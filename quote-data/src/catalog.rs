//! Supplier price lists loaded from CSV.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column        | Required | Type    | Notes                                   |
//! |---------------|----------|---------|-----------------------------------------|
//! | `supplier`    | yes      | string  | e.g. `tata`, `waaree-topcon`            |
//! | `kwp`         | yes      | decimal | Installed capacity in kW, e.g. `3.36`   |
//! | `phase`       | yes      | integer | `1` or `3`                              |
//! | `module`      | yes      | integer | Module wattage, e.g. `560`              |
//! | `qty`         | yes      | integer | Number of modules                       |
//! | `price`       | yes      | decimal | Package price in rupees                 |
//! | `wire`        | yes      | decimal | Included cable length in meters         |
//! | `out_of_area` | no       | decimal | Logistics fee; empty uses the default   |
//!
//! ### Example
//!
//! ```csv
//! supplier,kwp,phase,module,qty,price,wire,out_of_area
//! tata,3.36,1,560,6,180000,150,5000
//! tata,5.04,3,560,9,300000,225,5000
//! ```

use std::path::Path;

use quote_core::Product;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CsvRow {
    supplier: String,
    kwp: Decimal,
    phase: u8,
    module: u32,
    qty: u32,
    price: Decimal,
    wire: Decimal,
    out_of_area: Option<Decimal>,
}

/// Errors that can occur while loading a price list.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read price list: {0}")]
    Io(#[from] std::io::Error),

    /// Bad structure, missing column or a value of the wrong type.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, the header is row 0.
    #[error("invalid phase {phase} on row {row}: expected 1 or 3")]
    InvalidPhase { phase: u8, row: usize },
}

/// Products from one or more supplier price lists, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Product>,
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Product, CatalogError> {
    if row.phase != 1 && row.phase != 3 {
        return Err(CatalogError::InvalidPhase {
            phase: row.phase,
            row: row_number,
        });
    }

    Ok(Product {
        capacity_kw: row.kwp,
        phase: row.phase,
        module_wattage: row.module,
        module_count: row.qty,
        base_price: row.price,
        wire_meters: row.wire,
        out_of_area_fee: row.out_of_area.unwrap_or(Decimal::ZERO),
        supplier: Some(row.supplier.to_lowercase()),
    })
}

/// Parses CSV text into a [`Catalog`].
///
/// # Errors
///
/// * [`CatalogError::Parse`] if the CSV is malformed or a field cannot be
///   deserialised.
/// * [`CatalogError::InvalidPhase`] if a row's phase is not 1 or 3.
pub fn load_from_str(input: &str) -> Result<Catalog, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let entries = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(entries = entries.len(), "parsed price list");

    Ok(Catalog { entries })
}

/// Reads a price list from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(path)?;
    let catalog = load_from_str(&contents)?;

    info!(path = %path.display(), entries = catalog.len(), "loaded price list");

    Ok(catalog)
}

impl Catalog {
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the package a supplier lists for `capacity_kw` and `phase`.
    ///
    /// Supplier names match case-insensitively; capacities compare by value,
    /// so `3.3` finds a row written as `3.30`.
    pub fn find(
        &self,
        supplier: &str,
        capacity_kw: Decimal,
        phase: u8,
    ) -> Option<&Product> {
        let supplier = supplier.trim().to_lowercase();

        self.entries.iter().find(|p| {
            p.supplier.as_deref() == Some(supplier.as_str())
                && p.capacity_kw == capacity_kw
                && p.phase == phase
        })
    }

    /// Distinct supplier names in the order they first appear.
    pub fn suppliers(&self) -> Vec<&str> {
        let mut suppliers: Vec<&str> = Vec::new();
        for name in self.entries.iter().filter_map(|p| p.supplier.as_deref()) {
            if !suppliers.contains(&name) {
                suppliers.push(name);
            }
        }
        suppliers
    }

    /// Products of one supplier, in file order.
    pub fn by_supplier<'a>(
        &'a self,
        supplier: &str,
    ) -> impl Iterator<Item = &'a Product> + use<'a> {
        let supplier = supplier.trim().to_lowercase();
        self.entries
            .iter()
            .filter(move |p| p.supplier.as_deref() == Some(supplier.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const PRICE_LIST: &str = "\
supplier,kwp,phase,module,qty,price,wire,out_of_area
tata,3.36,1,560,6,180000,150,5000
tata,5.04,3,560,9,300000,225,5000
Waaree-Topcon,3.48,1,580,6,170000,150,
";

    // =========================================================================
    // load_from_str tests
    // =========================================================================

    #[test]
    fn parses_every_column() {
        let catalog = load_from_str(PRICE_LIST).expect("should parse price list");

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.entries()[0],
            Product {
                capacity_kw: dec!(3.36),
                phase: 1,
                module_wattage: 560,
                module_count: 6,
                base_price: dec!(180000),
                wire_meters: dec!(150),
                out_of_area_fee: dec!(5000),
                supplier: Some("tata".to_string()),
            }
        );
    }

    #[test]
    fn empty_out_of_area_fee_is_zero() {
        let catalog = load_from_str(PRICE_LIST).expect("should parse");

        assert_eq!(catalog.entries()[2].out_of_area_fee, dec!(0));
    }

    #[test]
    fn supplier_names_are_lowercased() {
        let catalog = load_from_str(PRICE_LIST).expect("should parse");

        assert_eq!(catalog.entries()[2].supplier.as_deref(), Some("waaree-topcon"));
    }

    #[test]
    fn header_only_is_an_empty_catalog() {
        let csv = "supplier,kwp,phase,module,qty,price,wire,out_of_area\n";
        let catalog = load_from_str(csv).expect("header-only CSV is valid");

        assert!(catalog.is_empty());
    }

    #[test]
    fn invalid_phase_reports_row() {
        let csv = "\
supplier,kwp,phase,module,qty,price,wire,out_of_area
tata,3.36,1,560,6,180000,150,5000
tata,5.04,2,560,9,300000,225,5000
";

        match load_from_str(csv).unwrap_err() {
            CatalogError::InvalidPhase { phase, row } => {
                assert_eq!(phase, 2);
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidPhase, got {:?}", other),
        }
    }

    #[test]
    fn missing_column_is_parse_error() {
        let csv = "supplier,kwp,phase,module,qty,wire\ntata,3.36,1,560,6,150\n";

        assert!(matches!(load_from_str(csv), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn non_numeric_price_is_parse_error() {
        let csv = "\
supplier,kwp,phase,module,qty,price,wire,out_of_area
tata,3.36,1,560,6,call us,150,5000
";

        assert!(matches!(load_from_str(csv), Err(CatalogError::Parse(_))));
    }

    // =========================================================================
    // lookup tests
    // =========================================================================

    #[test]
    fn find_matches_supplier_capacity_and_phase() {
        let catalog = load_from_str(PRICE_LIST).expect("should parse");

        let product = catalog.find("TATA", dec!(5.04), 3).expect("listed product");

        assert_eq!(product.base_price, dec!(300000));
        assert!(catalog.find("tata", dec!(5.04), 1).is_none());
        assert!(catalog.find("adani", dec!(3.36), 1).is_none());
    }

    #[test]
    fn find_compares_capacity_by_value() {
        let catalog = load_from_str(PRICE_LIST).expect("should parse");

        assert!(catalog.find("waaree-topcon", dec!(3.480), 1).is_some());
    }

    #[test]
    fn suppliers_are_distinct_in_file_order() {
        let catalog = load_from_str(PRICE_LIST).expect("should parse");

        assert_eq!(catalog.suppliers(), vec!["tata", "waaree-topcon"]);
    }

    #[test]
    fn by_supplier_filters_entries() {
        let catalog = load_from_str(PRICE_LIST).expect("should parse");

        assert_eq!(catalog.by_supplier("tata").count(), 2);
        assert_eq!(catalog.by_supplier("nobody").count(), 0);
    }
}
