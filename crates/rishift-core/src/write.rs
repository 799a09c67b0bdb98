//! Table writers for the analyzed output

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::AnalyzedRow;

/// Output header, in persisted column order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "Commodity",
    "RI_2023",
    "RI_2024",
    "Pct_Change",
    "Change_Category",
    "NLG_Interpretation",
];

/// Write the analyzed table, selecting the writer from the file extension.
///
/// `Pct_Change` is persisted at full precision; an undefined change becomes
/// an empty cell (display rounding only happens in the interpretation text).
pub fn write_table(path: &Path, rows: &[AnalyzedRow]) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("xlsx") => write_xlsx(path, rows),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => write_csv(path, rows),
        other => Err(Error::UnsupportedFormat(
            other.unwrap_or("<no extension>").to_string(),
        )),
    }
}

fn write_xlsx(path: &Path, rows: &[AnalyzedRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in OUTPUT_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &row.commodity_name)?;
        sheet.write_number(r, 1, row.ri_2023)?;
        sheet.write_number(r, 2, row.ri_2024)?;
        if let Some(pct) = row.pct_change {
            sheet.write_number(r, 3, pct)?;
        }
        sheet.write_string(r, 4, row.change_category.as_str())?;
        sheet.write_string(r, 5, &row.explanation)?;
    }

    workbook.save(path)?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn write_csv(path: &Path, rows: &[AnalyzedRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(OUTPUT_COLUMNS)?;

    for row in rows {
        let ri_2023 = row.ri_2023.to_string();
        let ri_2024 = row.ri_2024.to_string();
        let pct = row
            .pct_change
            .map(|p| p.to_string())
            .unwrap_or_default();
        wtr.write_record([
            row.commodity_name.as_str(),
            ri_2023.as_str(),
            ri_2024.as_str(),
            pct.as_str(),
            row.change_category.as_str(),
            row.explanation.as_str(),
        ])?;
    }

    wtr.flush()?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
