//! Views for the gender gap dashboard

pub mod colors;
mod coordinator;
pub mod filter;
pub mod model;
pub mod policy;
pub mod render;

pub use colors::{DivergingScale, Rgb, ValueRange};
pub use coordinator::ViewCoordinator;
pub use filter::{FilterEngine, RegionSeries};
pub use model::{
    BarGridViewModel, ControlsViewModel, DashboardFrame, LineViewModel, MapViewModel, ViewModelBuilder, ViewSet,
};
pub use policy::{BarClick, BarHighlight, LineDisplay, PresentationPolicy};
pub use render::{RecordingRenderer, Renderer};
