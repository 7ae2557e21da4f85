//! Dataset loading configuration

use gapviz_core::Year;
use serde::{Deserialize, Serialize};

/// How raw documents are turned into a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Flip the sign of every raw `gender_gap`
    ///
    /// The source documents report the gap with the opposite sign to the one
    /// the dashboard displays.
    pub negate_gender_gap: bool,

    /// Year selected at startup when the dataset contains it
    pub preferred_year: Option<Year>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            negate_gender_gap: true,
            preferred_year: Some(2021),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DatasetConfig = serde_json::from_str(r#"{"preferred_year": 2018}"#).unwrap();
        assert!(config.negate_gender_gap);
        assert_eq!(config.preferred_year, Some(2018));
    }
}
