//! Measurement and geography records

use gapviz_core::{LevelId, RegionId, Year};
use serde::{Deserialize, Serialize};

use crate::DataError;

/// One row of the measurement document, before sign normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurement {
    pub region: String,
    pub level: String,
    pub year: Year,
    pub gender_gap: f64,
}

/// A normalized gender gap measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementRecord {
    pub region: RegionId,
    pub level: LevelId,
    pub year: Year,
    /// Signed gap; the sign tells which gender is advantaged
    pub gender_gap: f64,
}

impl MeasurementRecord {
    pub fn new(region: impl Into<RegionId>, level: impl Into<LevelId>, year: Year, gender_gap: f64) -> Self {
        Self {
            region: region.into(),
            level: level.into(),
            year,
            gender_gap,
        }
    }

    /// Normalize a raw row; `row` is only used for error reporting
    pub fn from_raw(row: usize, raw: RawMeasurement, negate: bool) -> Result<Self, DataError> {
        if !raw.gender_gap.is_finite() {
            return Err(DataError::InvalidRecord {
                row,
                region: raw.region,
                level: raw.level,
                year: raw.year,
                reason: format!("gender_gap {} is not a finite number", raw.gender_gap),
            });
        }

        // Adding 0.0 turns a negated zero back into +0.0
        let gender_gap = (if negate { -raw.gender_gap } else { raw.gender_gap }) + 0.0;
        Ok(Self::new(raw.region, raw.level, raw.year, gender_gap))
    }
}

/// Maps a country name to the region it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRegionEntry {
    pub country: String,
    pub region: RegionId,
}

impl CountryRegionEntry {
    pub fn new(country: impl Into<String>, region: impl Into<RegionId>) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(gap: f64) -> RawMeasurement {
        RawMeasurement {
            region: "SA".to_string(),
            level: "primary".to_string(),
            year: 2021,
            gender_gap: gap,
        }
    }

    #[test]
    fn test_from_raw_negates_sign() {
        let record = MeasurementRecord::from_raw(0, raw(3.5), true).unwrap();
        assert_eq!(record.gender_gap, -3.5);

        let record = MeasurementRecord::from_raw(0, raw(3.5), false).unwrap();
        assert_eq!(record.gender_gap, 3.5);
    }

    #[test]
    fn test_from_raw_zero_stays_positive() {
        let record = MeasurementRecord::from_raw(0, raw(0.0), true).unwrap();
        assert_eq!(record.gender_gap, 0.0);
        assert!(record.gender_gap.is_sign_positive());
        assert_eq!(format!("{}", record.gender_gap), "0");
        assert_eq!(serde_json::to_string(&record.gender_gap).unwrap(), "0.0");
    }

    #[test]
    fn test_from_raw_rejects_nan() {
        let err = MeasurementRecord::from_raw(4, raw(f64::NAN), true).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { row: 4, .. }));
    }
}
