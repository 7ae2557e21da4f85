//! Application config file

use std::path::Path;

use anyhow::Context;
use gapviz_data::DatasetConfig;
use gapviz_views::PresentationPolicy;
use serde::Deserialize;

/// Contents of the `--config` file; every section is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
    pub presentation: PresentationPolicy,
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapviz_views::{BarHighlight, LineDisplay};
    use std::io::Write;

    #[test]
    fn test_load_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "dataset": {{"preferred_year": 2019}},
                "presentation": {{"line_display": "emphasize_selected", "bar_highlight": "sign_split"}}
            }}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.dataset.preferred_year, Some(2019));
        assert!(config.dataset.negate_gender_gap);
        assert_eq!(config.presentation.line_display, LineDisplay::EmphasizeSelected);
        assert_eq!(config.presentation.bar_highlight, BarHighlight::SignSplit);
    }

    #[test]
    fn test_empty_object_is_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        assert_eq!(AppConfig::load(file.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_bad_config_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
    }
}
