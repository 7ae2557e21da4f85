//! Renderer-agnostic view models
//!
//! View models are plain data, rebuilt wholesale from the dataset and the
//! selection on every change. Two builds from the same inputs compare equal.

pub mod bar;
pub mod controls;
pub mod line;
pub mod map;

pub use bar::{Bar, BarGridViewModel, BarPanel};
pub use controls::{ControlsViewModel, LevelButton, YearSlider};
pub use line::{Emphasis, LinePoint, LineSeries, LineViewModel};
pub use map::{MapPoint, MapViewModel};

use gapviz_core::SelectionState;
use gapviz_data::Dataset;
use serde::Serialize;

use crate::filter::FilterEngine;
use crate::policy::PresentationPolicy;

/// Which views a transition affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewSet {
    pub map: bool,
    pub bar_grid: bool,
    pub line: bool,
}

impl ViewSet {
    pub const ALL: ViewSet = ViewSet {
        map: true,
        bar_grid: true,
        line: true,
    };

    /// Views that depend on the selected region
    pub const REGION: ViewSet = ViewSet {
        map: false,
        bar_grid: true,
        line: true,
    };
}

/// Everything the renderer needs for one redraw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub selection: SelectionState,
    pub controls: ControlsViewModel,
    pub map: MapViewModel,
    pub bar_grid: BarGridViewModel,
    pub line: LineViewModel,
    /// Views that may differ from the previous frame
    pub changed: ViewSet,
}

/// Builds view models for a dataset under a presentation policy
#[derive(Debug, Clone, Copy)]
pub struct ViewModelBuilder<'a> {
    dataset: &'a Dataset,
    policy: &'a PresentationPolicy,
}

impl<'a> ViewModelBuilder<'a> {
    pub fn new(dataset: &'a Dataset, policy: &'a PresentationPolicy) -> Self {
        Self { dataset, policy }
    }

    pub fn map(&self, selection: &SelectionState) -> MapViewModel {
        let filtered = FilterEngine::new(self.dataset).for_selection(selection);
        MapViewModel::build(self.dataset, selection.year(), selection.level(), &filtered, self.policy)
    }

    pub fn bar_grid(&self, selection: &SelectionState) -> BarGridViewModel {
        BarGridViewModel::build(self.dataset, selection, self.policy)
    }

    pub fn line(&self, selection: &SelectionState) -> LineViewModel {
        LineViewModel::build(self.dataset, selection, self.policy)
    }

    pub fn controls(&self, selection: &SelectionState) -> ControlsViewModel {
        ControlsViewModel::build(self.dataset, selection, self.policy)
    }

    /// Rebuild every view model for `selection`
    pub fn frame(&self, selection: &SelectionState, changed: ViewSet) -> DashboardFrame {
        DashboardFrame {
            selection: selection.clone(),
            controls: self.controls(selection),
            map: self.map(selection),
            bar_grid: self.bar_grid(selection),
            line: self.line(selection),
            changed,
        }
    }
}
