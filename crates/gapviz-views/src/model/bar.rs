//! Per-level bar chart grid

use gapviz_core::{LevelId, RegionId, SelectionDomain, SelectionState, Year};
use gapviz_data::Dataset;
use serde::Serialize;

use crate::colors::{Rgb, ValueRange};
use crate::filter::FilterEngine;
use crate::policy::{BarHighlight, PresentationPolicy};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub region: RegionId,
    pub label: String,
    pub value: f64,
    pub color: Rgb,
    pub opacity: f32,
    /// True only for the selected region's bar
    pub emphasized: bool,
    pub hover_text: String,
}

/// Bars for one level at the selected year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPanel {
    pub level: LevelId,
    pub title: String,
    pub bars: Vec<Bar>,
    pub y_range: ValueRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGridViewModel {
    pub year: Year,
    pub selected_region: Option<RegionId>,
    /// One panel per level in dataset order, whatever level is active
    pub panels: Vec<BarPanel>,
}

impl BarGridViewModel {
    pub fn build(dataset: &Dataset, selection: &SelectionState, policy: &PresentationPolicy) -> Self {
        let engine = FilterEngine::new(dataset);
        let year = selection.year();

        let panels = dataset
            .levels()
            .iter()
            .map(|level| {
                let mut records = engine.by_year_and_level(year, level.as_str());
                records.sort_by_key(|r| dataset.region_position(r.region.as_str()));

                let bars = records
                    .into_iter()
                    .map(|record| {
                        let position = dataset.region_position(record.region.as_str()).unwrap_or(0);
                        bar(&record.region, record.gender_gap, position, selection, policy)
                    })
                    .collect();

                BarPanel {
                    level: level.clone(),
                    title: policy.level_label(level),
                    bars,
                    y_range: policy.bar_range,
                }
            })
            .collect();

        Self {
            year,
            selected_region: selection.region().cloned(),
            panels,
        }
    }

    pub fn panel(&self, level: &str) -> Option<&BarPanel> {
        self.panels.iter().find(|p| p.level == level)
    }

    /// True when no panel has a bar
    pub fn is_empty(&self) -> bool {
        self.panels.iter().all(|p| p.bars.is_empty())
    }
}

fn bar(
    region: &RegionId,
    value: f64,
    position: usize,
    selection: &SelectionState,
    policy: &PresentationPolicy,
) -> Bar {
    let (color, opacity, emphasized) = match selection.region() {
        None => (policy.region_color(region, position), 1.0, false),
        Some(selected) => {
            let emphasized = selected == region;
            let color = match (policy.bar_highlight, emphasized) {
                (BarHighlight::ValueScale, _) => policy.map_scale.color(value),
                (BarHighlight::SignSplit, true) if value < 0.0 => policy.negative_color,
                (BarHighlight::SignSplit, true) => policy.positive_color,
                (BarHighlight::SingleHue, true) => policy.highlight_color,
                (_, false) => policy.neutral_color,
            };
            let opacity = if emphasized { 1.0 } else { policy.bar_fade_opacity };
            (color, opacity, emphasized)
        }
    };

    Bar {
        region: region.clone(),
        label: policy.region_label(region),
        value,
        color,
        opacity,
        emphasized,
        hover_text: super::map::hover_text(region, value),
    }
}
