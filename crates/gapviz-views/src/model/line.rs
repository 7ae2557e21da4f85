//! Time-series line chart view model

use gapviz_core::{LevelId, RegionId, SelectionState, Year};
use gapviz_data::{Dataset, MeasurementRecord};
use serde::Serialize;

use crate::colors::{Rgb, ValueRange};
use crate::filter::FilterEngine;
use crate::policy::{LineDisplay, LineStroke, PresentationPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    pub year: Year,
    pub gender_gap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Normal,
    Highlighted,
    Faded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub region: RegionId,
    pub label: String,
    pub color: Rgb,
    /// Chronological, one point per year
    pub points: Vec<LinePoint>,
    pub emphasis: Emphasis,
    pub width: f32,
    pub marker_size: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineViewModel {
    pub level: LevelId,
    pub selected_region: Option<RegionId>,
    pub series: Vec<LineSeries>,
    pub y_range: ValueRange,
}

impl LineViewModel {
    /// Series for the selected level
    ///
    /// Without a selected region every region gets a series at normal
    /// emphasis. With one, `policy.line_display` decides between the selected
    /// series alone and all series with the selected one emphasized.
    pub fn build(dataset: &Dataset, selection: &SelectionState, policy: &PresentationPolicy) -> Self {
        let engine = FilterEngine::new(dataset);
        let level = selection.level();

        let series = match (selection.region(), policy.line_display) {
            (Some(selected), LineDisplay::SelectedOnly) => {
                let records = engine.by_region_and_level(selected.as_str(), level.as_str());
                if records.is_empty() {
                    Vec::new()
                } else {
                    vec![series(dataset, selected, &records, Emphasis::Highlighted, policy)]
                }
            }
            (selected, _) => engine
                .by_level(level.as_str())
                .iter()
                .map(|(region, records)| {
                    let emphasis = match selected {
                        None => Emphasis::Normal,
                        Some(selected) if selected == region => Emphasis::Highlighted,
                        Some(_) => Emphasis::Faded,
                    };
                    series(dataset, region, records, emphasis, policy)
                })
                .collect(),
        };

        Self {
            level: level.clone(),
            selected_region: selection.region().cloned(),
            series,
            y_range: policy.line_range,
        }
    }

    pub fn series_for(&self, region: &str) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.region == region)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

fn series(
    dataset: &Dataset,
    region: &RegionId,
    records: &[&MeasurementRecord],
    emphasis: Emphasis,
    policy: &PresentationPolicy,
) -> LineSeries {
    let position = dataset.region_position(region.as_str()).unwrap_or(0);
    let (stroke, opacity): (LineStroke, f32) = match emphasis {
        Emphasis::Normal => (policy.line_stroke, 1.0),
        Emphasis::Highlighted => (policy.line_selected_stroke, 1.0),
        Emphasis::Faded => (policy.line_stroke, policy.line_fade_opacity),
    };

    LineSeries {
        region: region.clone(),
        label: policy.region_label(region),
        color: policy.region_color(region, position),
        points: records
            .iter()
            .map(|r| LinePoint {
                year: r.year,
                gender_gap: r.gender_gap,
            })
            .collect(),
        emphasis,
        width: stroke.width,
        marker_size: stroke.marker_size,
        opacity,
    }
}
