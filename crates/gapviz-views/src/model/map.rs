//! Choropleth map view model

use ahash::AHashMap;
use gapviz_core::{LevelId, RegionId, Year};
use gapviz_data::{Dataset, MeasurementRecord};
use serde::Serialize;

use crate::colors::{Rgb, ValueRange};
use crate::policy::PresentationPolicy;

/// One shaded country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub country: String,
    pub region: RegionId,
    /// Raw gap of the country's region, not clamped
    pub value: f64,
    pub color: Rgb,
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapViewModel {
    pub year: Year,
    pub level: LevelId,
    pub points: Vec<MapPoint>,
    /// Fixed color domain shared by every year and level
    pub color_domain: ValueRange,
    pub color_midpoint: f64,
}

impl MapViewModel {
    /// Shade every country whose region has a value in `filtered`
    ///
    /// Countries whose region has no record are left out so the renderer can
    /// tell "no data" apart from a zero gap.
    pub fn build(
        dataset: &Dataset,
        year: Year,
        level: &LevelId,
        filtered: &[&MeasurementRecord],
        policy: &PresentationPolicy,
    ) -> Self {
        let region_values: AHashMap<&str, f64> = filtered
            .iter()
            .map(|r| (r.region.as_str(), r.gender_gap))
            .collect();

        let points = dataset
            .geography()
            .iter()
            .filter_map(|entry| {
                let value = *region_values.get(entry.region.as_str())?;
                Some(MapPoint {
                    country: entry.country.clone(),
                    region: entry.region.clone(),
                    value,
                    color: policy.map_scale.color(value),
                    hover_text: hover_text(&entry.region, value),
                })
            })
            .collect();

        Self {
            year,
            level: level.clone(),
            points,
            color_domain: policy.map_scale.domain,
            color_midpoint: policy.map_scale.midpoint(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub(crate) fn hover_text(region: &RegionId, value: f64) -> String {
    format!("{region}\nGender gap: {value}")
}
