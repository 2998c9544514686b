//! Single-row CSV import and the matching template.
//!
//! One analysis per file: a header naming all ten oxides and exactly one data
//! row. Unlike direct entry, the import path has no defaulting — a missing
//! column rejects the whole file. Extra columns are ignored.

use std::io::Read;
use std::path::Path;

use crate::oxides::{Oxide, OxideComposition};
use crate::validate::{parse_value, InputError};

/// Suggested filename for the downloadable template.
pub const CSV_TEMPLATE_NAME: &str = "CIPW_input_template.csv";

/// The fixed header row, one column per oxide in canonical order.
pub fn template() -> String {
    let header: Vec<&str> = Oxide::ALL.iter().map(|ox| ox.symbol()).collect();
    format!("{}\n", header.join(","))
}

/// Read one analysis from a CSV file on disk.
pub fn read_single_row_file(path: &Path) -> Result<OxideComposition, InputError> {
    let reader = csv::Reader::from_path(path)?;
    read_single_row(reader)
}

/// Read one analysis from any CSV source.
pub fn read_single_row_from<R: Read>(source: R) -> Result<OxideComposition, InputError> {
    read_single_row(csv::Reader::from_reader(source))
}

fn read_single_row<R: Read>(mut reader: csv::Reader<R>) -> Result<OxideComposition, InputError> {
    let headers = reader.headers()?.clone();
    let column_of = |oxide: Oxide| headers.iter().position(|h| h.trim() == oxide.symbol());

    let missing: Vec<String> = Oxide::ALL
        .iter()
        .filter(|&&ox| column_of(ox).is_none())
        .map(|ox| ox.symbol().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(InputError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }
    if rows.len() != 1 {
        return Err(InputError::RowCount(rows.len()));
    }
    let row = &rows[0];

    let mut comp = OxideComposition::default();
    for oxide in Oxide::ALL {
        // Column presence was checked above; the strict reader already
        // rejects rows shorter than the header.
        let cell = column_of(oxide).and_then(|i| row.get(i)).unwrap_or("");
        comp.set(oxide, parse_value(oxide, cell)?);
    }
    Ok(comp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "SiO2,Al2O3,Fe2O3,FeO,MgO,CaO,Na2O,K2O,TiO2,P2O5";

    #[test]
    fn template_is_the_full_header() {
        assert_eq!(template(), format!("{HEADER}\n"));
    }

    #[test]
    fn reads_a_valid_single_row() {
        let csv = format!("{HEADER}\n60,15,3,4,4,7,3,2,1,0.5\n");
        let comp = read_single_row_from(csv.as_bytes()).unwrap();
        assert_eq!(comp.sio2, 60.0);
        assert_eq!(comp.p2o5, 0.5);
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "P2O5,SiO2,Al2O3,Fe2O3,FeO,MgO,CaO,Na2O,K2O,TiO2\n0.5,60,15,3,4,4,7,3,2,1\n";
        let comp = read_single_row_from(csv.as_bytes()).unwrap();
        assert_eq!(comp.p2o5, 0.5);
        assert_eq!(comp.tio2, 1.0);
    }

    #[test]
    fn missing_column_is_rejected() {
        let csv = "SiO2,Al2O3,Fe2O3,FeO,MgO,CaO,Na2O,K2O,TiO2\n60,15,3,4,4,7,3,2,1\n";
        let err = read_single_row_from(csv.as_bytes()).unwrap_err();
        match err {
            InputError::MissingColumns(cols) => assert_eq!(cols, vec!["P2O5".to_string()]),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn more_than_one_row_is_rejected() {
        let csv = format!("{HEADER}\n60,15,3,4,4,7,3,2,1,0.5\n50,14,2,5,6,8,2,1,1,0.3\n");
        let err = read_single_row_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::RowCount(2)));
    }

    #[test]
    fn empty_body_is_rejected() {
        let csv = format!("{HEADER}\n");
        let err = read_single_row_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::RowCount(0)));
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let csv = format!("{HEADER}\n60,15,3,four,4,7,3,2,1,0.5\n");
        let err = read_single_row_from(csv.as_bytes()).unwrap_err();
        match err {
            InputError::NotNumeric { oxide, value } => {
                assert_eq!(oxide, "FeO");
                assert_eq!(value, "four");
            }
            other => panic!("expected NotNumeric, got {other:?}"),
        }
    }

    #[test]
    fn negative_cell_is_rejected() {
        let csv = format!("{HEADER}\n60,15,3,-4,4,7,3,2,1,0.5\n");
        let err = read_single_row_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::Negative { .. }));
    }
}
