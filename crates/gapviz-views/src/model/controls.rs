//! State of the dashboard controls

use gapviz_core::{LevelId, SelectionDomain, SelectionState, Year};
use gapviz_data::Dataset;
use serde::Serialize;

use crate::policy::PresentationPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSlider {
    pub min: Year,
    pub max: Year,
    /// Known years; the slider should snap to these
    pub years: Vec<Year>,
    pub value: Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelButton {
    pub level: LevelId,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlsViewModel {
    pub year_slider: YearSlider,
    pub level_buttons: Vec<LevelButton>,
    /// Reset only makes sense while a region is selected
    pub reset_enabled: bool,
}

impl ControlsViewModel {
    pub fn build(dataset: &Dataset, selection: &SelectionState, policy: &PresentationPolicy) -> Self {
        let years = dataset.years().to_vec();
        let year_slider = YearSlider {
            min: years.first().copied().unwrap_or(selection.year()),
            max: years.last().copied().unwrap_or(selection.year()),
            years,
            value: selection.year(),
        };

        let level_buttons = dataset
            .levels()
            .iter()
            .map(|level| LevelButton {
                level: level.clone(),
                label: policy.level_label(level),
                active: level == selection.level(),
            })
            .collect();

        Self {
            year_slider,
            level_buttons,
            reset_enabled: selection.region().is_some(),
        }
    }

    pub fn active_level(&self) -> Option<&LevelId> {
        self.level_buttons.iter().find(|b| b.active).map(|b| &b.level)
    }
}
