//! UI events reported back by the renderer

use serde::{Deserialize, Serialize};

use crate::ids::{LevelId, RegionId, Year};
use crate::selection::YearStep;

/// The view an interaction originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceView {
    Map,
    BarGrid,
    Line,
}

/// A click on a data point in one of the three views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PointClick {
    /// Map points are countries; the region is resolved through the geography lookup
    Map { country: String },
    /// A bar in the panel for `level`
    Bar { level: LevelId, region: RegionId },
    Line { region: RegionId },
}

impl PointClick {
    pub fn source(&self) -> SourceView {
        match self {
            PointClick::Map { .. } => SourceView::Map,
            PointClick::Bar { .. } => SourceView::BarGrid,
            PointClick::Line { .. } => SourceView::Line,
        }
    }
}

/// Interaction events consumed by the view coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// Year slider moved
    YearChanged { year: Year },
    /// Year slider nudged to the adjacent known year
    YearStepped { step: YearStep },
    /// Level button clicked
    LevelSelected { level: LevelId },
    PointClicked { click: PointClick },
    /// Reset button clicked
    ResetRegion,
}

impl UiEvent {
    pub fn year(year: Year) -> Self {
        UiEvent::YearChanged { year }
    }

    pub fn level(level: impl Into<LevelId>) -> Self {
        UiEvent::LevelSelected { level: level.into() }
    }

    pub fn map_click(country: impl Into<String>) -> Self {
        UiEvent::PointClicked {
            click: PointClick::Map {
                country: country.into(),
            },
        }
    }

    pub fn bar_click(level: impl Into<LevelId>, region: impl Into<RegionId>) -> Self {
        UiEvent::PointClicked {
            click: PointClick::Bar {
                level: level.into(),
                region: region.into(),
            },
        }
    }

    pub fn line_click(region: impl Into<RegionId>) -> Self {
        UiEvent::PointClicked {
            click: PointClick::Line {
                region: region.into(),
            },
        }
    }

    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::YearChanged { .. } => "year_changed",
            UiEvent::YearStepped { .. } => "year_stepped",
            UiEvent::LevelSelected { .. } => "level_selected",
            UiEvent::PointClicked { .. } => "point_clicked",
            UiEvent::ResetRegion => "reset_region",
        }
    }
}
