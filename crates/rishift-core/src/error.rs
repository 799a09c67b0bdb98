//! Error types for rishift

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("Workbook write error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    #[error("Table has no header row: {0}")]
    EmptyTable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
