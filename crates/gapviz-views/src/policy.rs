//! Presentation policy shared by the view model builders
//!
//! Every visual variant of the dashboard (palettes, labels, fade levels, the
//! highlight rule for bars, what the line chart shows for a selected region,
//! whether a bar click also switches level) is a field here rather than a
//! separate code path.

use gapviz_core::{LevelId, RegionId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::colors::{categorical_color, DivergingScale, Rgb, ValueRange};

/// How the selected bar is distinguished when a region is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarHighlight {
    /// Every bar colored by value on the map's diverging scale
    #[default]
    ValueScale,
    /// Selected bar uses the positive or negative color by sign, others neutral
    SignSplit,
    /// Selected bar uses the highlight color, others neutral
    SingleHue,
}

/// What the line chart shows while a region is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDisplay {
    /// Only the selected region's series
    #[default]
    SelectedOnly,
    /// All series, the selected one emphasized and the rest faded
    EmphasizeSelected,
}

/// What a click on a bar changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarClick {
    #[default]
    SelectRegion,
    /// Also switch the active level to the clicked panel's level
    SelectRegionAndLevel,
}

/// Stroke settings for one emphasis level of a line series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStroke {
    pub width: f32,
    pub marker_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationPolicy {
    /// Short labels for regions, keyed by full region name
    pub region_labels: IndexMap<RegionId, String>,
    /// Fixed categorical color per region; unlisted regions use the palette
    pub region_colors: IndexMap<RegionId, Rgb>,
    /// Display labels for levels; unlisted levels show their id
    pub level_labels: IndexMap<LevelId, String>,

    /// Color scale for the map (and value-scaled bars)
    pub map_scale: DivergingScale,

    pub bar_highlight: BarHighlight,
    pub bar_fade_opacity: f32,
    pub neutral_color: Rgb,
    pub highlight_color: Rgb,
    pub positive_color: Rgb,
    pub negative_color: Rgb,
    pub bar_range: ValueRange,

    pub line_display: LineDisplay,
    pub line_fade_opacity: f32,
    pub line_stroke: LineStroke,
    pub line_selected_stroke: LineStroke,
    pub line_range: ValueRange,

    pub bar_click: BarClick,
}

impl Default for PresentationPolicy {
    fn default() -> Self {
        let regions = [
            ("East Asia and Pacific (WB)", "EAP", Rgb::new(0x00, 0x72, 0xb2)),
            ("Europe and Central Asia (WB)", "ECA", Rgb::new(0xe6, 0x9f, 0x00)),
            ("Latin America and Caribbean (WB)", "LAC", Rgb::new(0x00, 0x9e, 0x73)),
            ("Middle East and North Africa (WB)", "MENA", Rgb::new(0xcc, 0x79, 0xa7)),
            ("North America (WB)", "NA", Rgb::new(0xd5, 0x5e, 0x00)),
            ("South Asia (WB)", "SA", Rgb::new(0x56, 0xb4, 0xe9)),
            ("Sub-Saharan Africa (WB)", "SSA", Rgb::new(0xf0, 0xe4, 0x42)),
        ];

        Self {
            region_labels: regions
                .iter()
                .map(|(region, label, _)| (RegionId::from(*region), label.to_string()))
                .collect(),
            region_colors: regions
                .iter()
                .map(|(region, _, color)| (RegionId::from(*region), *color))
                .collect(),
            level_labels: IndexMap::new(),
            map_scale: DivergingScale::default(),
            bar_highlight: BarHighlight::default(),
            bar_fade_opacity: 0.25,
            neutral_color: Rgb::new(0xbd, 0xbd, 0xbd),
            highlight_color: Rgb::new(0x2f, 0x6d, 0xf6),
            positive_color: Rgb::new(0x21, 0x66, 0xac),
            negative_color: Rgb::new(0xb2, 0x18, 0x2b),
            bar_range: ValueRange::new(-10.0, 10.0),
            line_display: LineDisplay::default(),
            line_fade_opacity: 0.3,
            line_stroke: LineStroke {
                width: 2.0,
                marker_size: 5.0,
            },
            line_selected_stroke: LineStroke {
                width: 4.0,
                marker_size: 7.0,
            },
            line_range: ValueRange::new(-20.0, 35.0),
            bar_click: BarClick::default(),
        }
    }
}

impl PresentationPolicy {
    pub fn region_label(&self, region: &RegionId) -> String {
        self.region_labels
            .get(region)
            .cloned()
            .unwrap_or_else(|| region.to_string())
    }

    pub fn level_label(&self, level: &LevelId) -> String {
        self.level_labels
            .get(level)
            .cloned()
            .unwrap_or_else(|| level.to_string())
    }

    /// Fixed color of a region; `position` is its first-seen index in the dataset
    pub fn region_color(&self, region: &RegionId, position: usize) -> Rgb {
        self.region_colors
            .get(region)
            .copied()
            .unwrap_or_else(|| categorical_color(position))
    }
}
