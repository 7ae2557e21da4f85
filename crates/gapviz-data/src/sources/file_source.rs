use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use super::DatasetSource;
use crate::record::{CountryRegionEntry, RawMeasurement};
use crate::DataError;

/// Reads the two documents from local files
///
/// The measurement document is CSV when its extension is `.csv`, JSON
/// otherwise. The geography document is always JSON.
pub struct FileSource {
    measurements_path: PathBuf,
    geography_path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(measurements_path: impl Into<PathBuf>, geography_path: impl Into<PathBuf>) -> Self {
        let measurements_path = measurements_path.into();
        let geography_path = geography_path.into();
        let name = format!("{} + {}", measurements_path.display(), geography_path.display());
        Self {
            measurements_path,
            geography_path,
            name,
        }
    }

    fn is_csv(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn read_csv(path: &Path) -> Result<Vec<RawMeasurement>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            rows.push(result?);
        }
        Ok(rows)
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn measurements(&self) -> Result<Vec<RawMeasurement>, DataError> {
        let path = self.measurements_path.clone();
        tokio::task::spawn_blocking(move || {
            let rows = if Self::is_csv(&path) {
                Self::read_csv(&path)
            } else {
                Self::read_json(&path)
            };
            if let Err(e) = &rows {
                tracing::error!("Failed to read measurements from {}: {}", path.display(), e);
            }
            rows
        })
        .await?
    }

    async fn geography(&self) -> Result<Vec<CountryRegionEntry>, DataError> {
        let path = self.geography_path.clone();
        tokio::task::spawn_blocking(move || {
            let rows = Self::read_json(&path);
            if let Err(e) = &rows {
                tracing::error!("Failed to read geography from {}: {}", path.display(), e);
            }
            rows
        })
        .await?
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::load_dataset;
    use crate::DatasetConfig;
    use std::io::Write;
    use tempfile::TempDir;

    const GEOGRAPHY: &str = r#"[
        {"country": "India", "region": "South Asia (WB)"},
        {"country": "Chad", "region": "Sub-Saharan Africa (WB)"}
    ]"#;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_reads_json_documents() {
        let dir = TempDir::new().unwrap();
        let data = write(
            &dir,
            "data.json",
            r#"[{"region": "South Asia (WB)", "level": "primary", "year": 2021, "gender_gap": 3}]"#,
        );
        let geo = write(&dir, "geo.json", GEOGRAPHY);

        let source = FileSource::new(data, geo);
        let dataset = load_dataset(&source, &DatasetConfig::default()).await.unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].gender_gap, -3.0);
        assert_eq!(dataset.geography().len(), 2);
    }

    #[tokio::test]
    async fn test_reads_csv_measurements() {
        let dir = TempDir::new().unwrap();
        let data = write(
            &dir,
            "data.CSV",
            "region,level,year,gender_gap\nSouth Asia (WB), primary ,2020,-1.5\nSub-Saharan Africa (WB),primary,2020,2\n",
        );
        let geo = write(&dir, "geo.json", GEOGRAPHY);

        let source = FileSource::new(data, geo);
        let rows = source.measurements().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].level, "primary");
        assert_eq!(rows[0].gender_gap, -1.5);
    }

    #[tokio::test]
    async fn test_missing_file_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        let geo = write(&dir, "geo.json", GEOGRAPHY);

        let source = FileSource::new(dir.path().join("missing.json"), geo);
        let err = load_dataset(&source, &DatasetConfig::default()).await.unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_reported() {
        let dir = TempDir::new().unwrap();
        let data = write(&dir, "data.json", r#"[{"region": "SA"}]"#);
        let geo = write(&dir, "geo.json", GEOGRAPHY);

        let source = FileSource::new(data, geo);
        let err = load_dataset(&source, &DatasetConfig::default()).await.unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }
}
