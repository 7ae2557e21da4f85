//! Core functionality for the education gender gap dashboard
//!
//! This crate provides the identifiers, the shared selection state and the
//! UI event vocabulary that every other layer builds on.

pub mod events;
pub mod ids;
pub mod selection;

// Re-export commonly used types
pub use events::{PointClick, SourceView, UiEvent};
pub use ids::{LevelId, RegionId, Year};
pub use selection::{SelectionDomain, SelectionError, SelectionState, YearStep};
