//! Data sources delivering the two input documents

pub mod file_source;

pub use file_source::FileSource;

use async_trait::async_trait;

use crate::config::DatasetConfig;
use crate::dataset::Dataset;
use crate::record::{CountryRegionEntry, RawMeasurement};
use crate::DataError;

/// Trait for anything that can supply the measurement and geography documents
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the measurement document (document A)
    async fn measurements(&self) -> Result<Vec<RawMeasurement>, DataError>;

    /// Fetch the country to region document (document B)
    async fn geography(&self) -> Result<Vec<CountryRegionEntry>, DataError>;

    /// Get the source name/path
    fn source_name(&self) -> &str;
}

/// Retrieve both documents concurrently and build the dataset
///
/// Nothing is built unless both retrievals succeed.
pub async fn load_dataset(source: &dyn DatasetSource, config: &DatasetConfig) -> Result<Dataset, DataError> {
    tracing::info!("Loading dataset from {}", source.source_name());

    let (raw, geography) = tokio::try_join!(source.measurements(), source.geography())?;
    tracing::debug!(
        "Fetched {} measurement rows and {} geography rows",
        raw.len(),
        geography.len()
    );

    Dataset::from_raw(raw, geography, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapviz_core::SelectionDomain;

    struct MemorySource {
        measurements: Vec<RawMeasurement>,
        geography: Option<Vec<CountryRegionEntry>>,
    }

    #[async_trait]
    impl DatasetSource for MemorySource {
        async fn measurements(&self) -> Result<Vec<RawMeasurement>, DataError> {
            Ok(self.measurements.clone())
        }

        async fn geography(&self) -> Result<Vec<CountryRegionEntry>, DataError> {
            self.geography.clone().ok_or_else(|| {
                DataError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "geography missing"))
            })
        }

        fn source_name(&self) -> &str {
            "memory"
        }
    }

    fn measurements() -> Vec<RawMeasurement> {
        vec![RawMeasurement {
            region: "SA".to_string(),
            level: "primary".to_string(),
            year: 2021,
            gender_gap: 3.0,
        }]
    }

    #[tokio::test]
    async fn test_load_joins_both_documents() {
        let source = MemorySource {
            measurements: measurements(),
            geography: Some(vec![CountryRegionEntry::new("India", "SA")]),
        };

        let dataset = load_dataset(&source, &DatasetConfig::default()).await.unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].gender_gap, -3.0);
        assert_eq!(dataset.region_of("India").map(|r| r.as_str()), Some("SA"));
        assert!(dataset.has_year(2021));
    }

    #[tokio::test]
    async fn test_load_fails_when_either_document_fails() {
        let source = MemorySource {
            measurements: measurements(),
            geography: None,
        };

        let err = load_dataset(&source, &DatasetConfig::default()).await.unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
