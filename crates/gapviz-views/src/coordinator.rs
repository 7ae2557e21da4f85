//! View coordinator - the dashboard's state machine
//!
//! All interaction goes through [`ViewCoordinator::handle`]. Each accepted
//! event updates the selection and then rebuilds and renders every view, so
//! the map, the bar grid and the line chart never disagree about what is
//! selected.
//!
//! | event                     | selection change                       | changed views |
//! |---------------------------|----------------------------------------|---------------|
//! | year changed / stepped    | year                                   | all           |
//! | level selected            | level                                  | all           |
//! | map point clicked         | region of the clicked country          | bars, line    |
//! | bar clicked               | region (and level, per policy)         | all           |
//! | line point clicked        | region                                 | bars, line    |
//! | reset                     | region cleared                         | bars, line    |

use std::sync::Arc;

use gapviz_core::{PointClick, SelectionError, SelectionState, UiEvent};
use gapviz_data::Dataset;

use crate::model::{DashboardFrame, ViewModelBuilder, ViewSet};
use crate::policy::{BarClick, PresentationPolicy};
use crate::render::Renderer;

pub struct ViewCoordinator<R: Renderer> {
    dataset: Arc<Dataset>,
    policy: PresentationPolicy,
    selection: SelectionState,
    renderer: R,
}

impl<R: Renderer> ViewCoordinator<R> {
    /// Enter the initial state and render the first frame
    ///
    /// Takes a fully loaded dataset, so nothing renders before both input
    /// documents are available.
    pub fn new(dataset: Arc<Dataset>, policy: PresentationPolicy, renderer: R) -> Result<Self, SelectionError> {
        let selection = dataset.initial_selection()?;
        tracing::info!(
            "Initial selection: year {}, level '{}'",
            selection.year(),
            selection.level()
        );

        let mut coordinator = Self {
            dataset,
            policy,
            selection,
            renderer,
        };
        coordinator.render(ViewSet::ALL);
        Ok(coordinator)
    }

    /// Apply one UI event
    ///
    /// On success returns the views the transition affects. On error the
    /// selection is unchanged and nothing is rendered.
    pub fn handle(&mut self, event: UiEvent) -> Result<ViewSet, SelectionError> {
        let name = event.name();
        match self.apply(event) {
            Ok(changed) => {
                tracing::debug!(
                    "{}: year {}, level '{}', region {:?}",
                    name,
                    self.selection.year(),
                    self.selection.level(),
                    self.selection.region().map(|r| r.as_str())
                );
                self.render(changed);
                Ok(changed)
            }
            Err(e) => {
                tracing::warn!("Rejected {}: {}", name, e);
                Err(e)
            }
        }
    }

    fn apply(&mut self, event: UiEvent) -> Result<ViewSet, SelectionError> {
        let dataset = self.dataset.as_ref();
        match event {
            UiEvent::YearChanged { year } => {
                self.selection.set_year(dataset, year)?;
                Ok(ViewSet::ALL)
            }
            UiEvent::YearStepped { step } => {
                self.selection.step_year(dataset, step)?;
                Ok(ViewSet::ALL)
            }
            UiEvent::LevelSelected { level } => {
                self.selection.set_level(dataset, level)?;
                Ok(ViewSet::ALL)
            }
            UiEvent::PointClicked { click } => match click {
                PointClick::Map { country } => {
                    let region = dataset
                        .region_of(&country)
                        .cloned()
                        .ok_or(SelectionError::UnknownCountry(country))?;
                    self.selection.set_region(dataset, Some(region))?;
                    Ok(ViewSet::REGION)
                }
                PointClick::Bar { level, region } => {
                    // Work on a copy so a bad level or region leaves nothing half-applied
                    let mut next = self.selection.clone();
                    if self.policy.bar_click == BarClick::SelectRegionAndLevel {
                        next.set_level(dataset, level)?;
                    }
                    next.set_region(dataset, Some(region))?;
                    self.selection = next;
                    Ok(ViewSet::ALL)
                }
                PointClick::Line { region } => {
                    self.selection.set_region(dataset, Some(region))?;
                    Ok(ViewSet::REGION)
                }
            },
            UiEvent::ResetRegion => {
                self.selection.clear_region();
                Ok(ViewSet::REGION)
            }
        }
    }

    /// Re-run the render cycle with the selection unchanged
    pub fn refresh(&mut self) {
        self.render(ViewSet::ALL);
    }

    /// Build the frame for the current selection without rendering it
    pub fn frame(&self, changed: ViewSet) -> DashboardFrame {
        ViewModelBuilder::new(&self.dataset, &self.policy).frame(&self.selection, changed)
    }

    fn render(&mut self, changed: ViewSet) {
        let frame = self.frame(changed);
        self.renderer.render(&frame);
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn policy(&self) -> &PresentationPolicy {
        &self.policy
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;
    use gapviz_data::{CountryRegionEntry, MeasurementRecord};

    fn coordinator(policy: PresentationPolicy) -> ViewCoordinator<RecordingRenderer> {
        let dataset = Dataset::new(
            vec![
                MeasurementRecord::new("SA", "primary", 2021, -3.0),
                MeasurementRecord::new("SSA", "primary", 2021, 2.0),
                MeasurementRecord::new("SA", "secondary", 2020, 1.0),
            ],
            vec![CountryRegionEntry::new("India", "SA")],
        )
        .unwrap();
        ViewCoordinator::new(Arc::new(dataset), policy, RecordingRenderer::new()).unwrap()
    }

    #[test]
    fn test_initial_render_happens_once() {
        let coordinator = coordinator(PresentationPolicy::default());
        assert_eq!(coordinator.dataset().len(), 3);
        assert_eq!(coordinator.policy(), &PresentationPolicy::default());
        assert_eq!(coordinator.renderer().frames().len(), 1);
        assert_eq!(coordinator.renderer().frames()[0].changed, ViewSet::ALL);
    }

    #[test]
    fn test_rejected_event_renders_nothing() {
        let mut coordinator = coordinator(PresentationPolicy::default());
        let before = coordinator.selection().clone();

        assert_eq!(
            coordinator.handle(UiEvent::map_click("Peru")),
            Err(SelectionError::UnknownCountry("Peru".to_string()))
        );
        assert_eq!(coordinator.handle(UiEvent::year(1990)), Err(SelectionError::UnknownYear(1990)));
        assert_eq!(coordinator.selection(), &before);
        assert_eq!(coordinator.renderer().frames().len(), 1);
    }

    #[test]
    fn test_bar_click_with_level_switch_is_atomic() {
        let mut coordinator = coordinator(PresentationPolicy {
            bar_click: BarClick::SelectRegionAndLevel,
            ..PresentationPolicy::default()
        });

        let err = coordinator.handle(UiEvent::bar_click("secondary", "Atlantis")).unwrap_err();
        assert_eq!(err, SelectionError::UnknownRegion("Atlantis".into()));
        assert_eq!(coordinator.selection().level(), "primary");

        coordinator.handle(UiEvent::bar_click("secondary", "SA")).unwrap();
        assert_eq!(coordinator.selection().level(), "secondary");
        assert!(coordinator.selection().is_selected("SA"));
    }
}
