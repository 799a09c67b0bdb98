//! rishift Core Library
//!
//! Shared functionality for the rishift relative importance analyzer:
//! - Table loaders for xlsx and csv inputs with a fixed header contract
//! - Row cleaning (data quality filtering)
//! - Percent change computation
//! - Change classification and natural-language interpretation
//! - Table writers and the pipeline orchestrator

pub mod change;
pub mod classify;
pub mod clean;
pub mod error;
pub mod load;
pub mod models;
pub mod pipeline;
pub mod write;

pub use error::{Error, Result};
pub use models::{AnalyzedRow, ChangeCategory, CleanedRow, InputRow};
pub use pipeline::{run, PipelineSummary};
