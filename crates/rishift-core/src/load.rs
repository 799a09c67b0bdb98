//! Table loaders for the relative importance input
//!
//! Both loaders enforce the same header contract: the required columns must
//! all be present by exact name, and a missing set is reported in one error
//! before any row is processed.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::InputRow;

/// Commodity name column, as published in the BLS table.
pub const COL_COMMODITY: &str = "Index";
/// December 2023 relative importance column.
pub const COL_RI_2023: &str = "Relative importance December 2023";
/// December 2024 relative importance column.
pub const COL_RI_2024: &str = "Relative importance December 2024";
/// Optional commodity code column; captured when present, unused downstream.
pub const COL_COMMODITY_CODE: &str = "Commodity code";

/// Resolved positions of the schema columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    name: usize,
    ri_2023: usize,
    ri_2024: usize,
    code: Option<usize>,
}

impl ColumnLayout {
    /// Validate a header row against the fixed schema.
    ///
    /// Collects every absent required column so a bad export is diagnosed in
    /// a single pass.
    fn from_header(header: &[String]) -> Result<Self> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);

        let name = find(COL_COMMODITY);
        let ri_2023 = find(COL_RI_2023);
        let ri_2024 = find(COL_RI_2024);

        match (name, ri_2023, ri_2024) {
            (Some(name), Some(ri_2023), Some(ri_2024)) => Ok(Self {
                name,
                ri_2023,
                ri_2024,
                code: find(COL_COMMODITY_CODE),
            }),
            _ => {
                let missing: Vec<String> = [
                    (COL_COMMODITY, name),
                    (COL_RI_2023, ri_2023),
                    (COL_RI_2024, ri_2024),
                ]
                .iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(col, _)| col.to_string())
                .collect();
                Err(Error::MissingColumns(missing))
            }
        }
    }
}

/// Load the input table, selecting the loader from the file extension.
///
/// `sheet` names the worksheet to read from an xlsx workbook; it is ignored
/// for csv inputs.
pub fn load_table(path: &Path, sheet: &str) -> Result<Vec<InputRow>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("xlsx") => load_xlsx(path, sheet),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_csv(path),
        other => Err(Error::UnsupportedFormat(
            other.unwrap_or("<no extension>").to_string(),
        )),
    }
}

/// Load the named sheet of an xlsx workbook, first row as header.
fn load_xlsx(path: &Path, sheet: &str) -> Result<Vec<InputRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range(sheet)?;

    let mut row_iter = range.rows();
    let header: Vec<String> = row_iter
        .next()
        .ok_or_else(|| Error::EmptyTable(sheet.to_string()))?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    let layout = ColumnLayout::from_header(&header)?;

    let rows: Vec<InputRow> = row_iter
        .map(|cells| InputRow {
            commodity_code: layout.code.and_then(|i| cell_text(cells.get(i))),
            commodity_name: cell_text(cells.get(layout.name)),
            ri_2023: cell_text(cells.get(layout.ri_2023)),
            ri_2024: cell_text(cells.get(layout.ri_2024)),
        })
        .collect();

    debug!("Loaded {} rows from sheet '{}'", rows.len(), sheet);
    Ok(rows)
}

/// Load a csv file, first row as header.
fn load_csv(path: &Path) -> Result<Vec<InputRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let layout = ColumnLayout::from_header(&header)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let field = |idx: usize| {
            record
                .get(idx)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        rows.push(InputRow {
            commodity_code: layout.code.and_then(field),
            commodity_name: field(layout.name),
            ri_2023: field(layout.ri_2023),
            ri_2024: field(layout.ri_2024),
        });
    }

    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Convert a cell to trimmed text. Empty and error cells become None.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        other => Some(other.to_string()),
    }
}
