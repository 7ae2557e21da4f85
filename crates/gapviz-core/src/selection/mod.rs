//! Shared selection state and the rules for changing it

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{LevelId, RegionId, Year};

mod state;

pub use state::SelectionState;

/// The values a selection is allowed to take
///
/// Implemented by the dataset once it is loaded. Keeping this as a trait lets
/// the selection rules live here without depending on how records are stored.
pub trait SelectionDomain {
    /// Known years, sorted ascending without duplicates
    fn years(&self) -> &[Year];

    /// Known levels, in first-seen order
    fn levels(&self) -> &[LevelId];

    /// Known regions, in first-seen order
    fn regions(&self) -> &[RegionId];

    fn has_year(&self, year: Year) -> bool {
        self.years().binary_search(&year).is_ok()
    }

    fn has_level(&self, level: &str) -> bool {
        self.levels().iter().any(|l| l == level)
    }

    fn has_region(&self, region: &str) -> bool {
        self.regions().iter().any(|r| r == region)
    }
}

/// Direction for stepping through the known years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearStep {
    Next,
    Previous,
}

/// Reasons a selection change is rejected
///
/// A rejected change always leaves the selection untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("year {0} is not present in the dataset")]
    UnknownYear(Year),

    #[error("level '{0}' is not present in the dataset")]
    UnknownLevel(LevelId),

    #[error("region '{0}' is not present in the dataset")]
    UnknownRegion(RegionId),

    #[error("country '{0}' is not mapped to any region")]
    UnknownCountry(String),

    #[error("dataset has no {0} to select from")]
    EmptyDomain(&'static str),

    #[error("no year {step:?} of {year}")]
    YearBoundary { year: Year, step: YearStep },
}
