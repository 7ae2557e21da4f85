//! Dataset and data sources for the gender gap dashboard

pub mod config;
pub mod dataset;
pub mod index;
pub mod record;
pub mod sources;

use gapviz_core::Year;
use thiserror::Error;
use tokio::task::JoinError;

// Re-exports
pub use config::DatasetConfig;
pub use dataset::Dataset;
pub use index::DataIndex;
pub use record::{CountryRegionEntry, MeasurementRecord, RawMeasurement};
pub use sources::{load_dataset, DatasetSource, FileSource};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),

    #[error("Invalid record #{row} ({region}, {level}, {year}): {reason}")]
    InvalidRecord {
        row: usize,
        region: String,
        level: String,
        year: Year,
        reason: String,
    },

    #[error("Dataset contains no measurement records")]
    EmptyDataset,
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}
