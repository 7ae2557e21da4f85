//! Selection state implementation

use serde::Serialize;

use super::{SelectionDomain, SelectionError, YearStep};
use crate::ids::{LevelId, RegionId, Year};

/// The year/level/region triple driving every view
///
/// Fields are only reachable through the validating mutators, so a value of
/// this type always refers to a year, level and (optional) region that exist
/// in the domain it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    year: Year,
    level: LevelId,
    region: Option<RegionId>,
}

impl SelectionState {
    /// Build the state entered once the dataset is available
    ///
    /// Uses `preferred_year` when the domain knows it, otherwise the latest
    /// year. The level is the first one encountered; no region is selected.
    pub fn initial<D>(domain: &D, preferred_year: Option<Year>) -> Result<Self, SelectionError>
    where
        D: SelectionDomain + ?Sized,
    {
        let latest = *domain
            .years()
            .last()
            .ok_or(SelectionError::EmptyDomain("years"))?;
        let year = match preferred_year {
            Some(year) if domain.has_year(year) => year,
            Some(year) => {
                tracing::debug!("Preferred year {} has no data, starting at {}", year, latest);
                latest
            }
            None => latest,
        };

        let level = domain
            .levels()
            .first()
            .cloned()
            .ok_or(SelectionError::EmptyDomain("levels"))?;

        Ok(Self {
            year,
            level,
            region: None,
        })
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn level(&self) -> &LevelId {
        &self.level
    }

    pub fn region(&self) -> Option<&RegionId> {
        self.region.as_ref()
    }

    /// Whether `region` is the selected one
    pub fn is_selected(&self, region: &str) -> bool {
        self.region.as_ref().is_some_and(|r| r == region)
    }

    pub fn set_year<D>(&mut self, domain: &D, year: Year) -> Result<(), SelectionError>
    where
        D: SelectionDomain + ?Sized,
    {
        if !domain.has_year(year) {
            return Err(SelectionError::UnknownYear(year));
        }
        self.year = year;
        Ok(())
    }

    pub fn set_level<D>(&mut self, domain: &D, level: LevelId) -> Result<(), SelectionError>
    where
        D: SelectionDomain + ?Sized,
    {
        if !domain.has_level(level.as_str()) {
            return Err(SelectionError::UnknownLevel(level));
        }
        self.level = level;
        Ok(())
    }

    /// Select a region, or clear the selection with `None`
    pub fn set_region<D>(&mut self, domain: &D, region: Option<RegionId>) -> Result<(), SelectionError>
    where
        D: SelectionDomain + ?Sized,
    {
        if let Some(region) = &region {
            if !domain.has_region(region.as_str()) {
                return Err(SelectionError::UnknownRegion(region.clone()));
            }
        }
        self.region = region;
        Ok(())
    }

    pub fn clear_region(&mut self) {
        self.region = None;
    }

    /// Move to the adjacent known year
    pub fn step_year<D>(&mut self, domain: &D, step: YearStep) -> Result<Year, SelectionError>
    where
        D: SelectionDomain + ?Sized,
    {
        let years = domain.years();
        let current = years
            .binary_search(&self.year)
            .map_err(|_| SelectionError::UnknownYear(self.year))?;

        let target = match step {
            YearStep::Next => current + 1,
            YearStep::Previous => current.checked_sub(1).ok_or(SelectionError::YearBoundary {
                year: self.year,
                step,
            })?,
        };

        let year = *years.get(target).ok_or(SelectionError::YearBoundary {
            year: self.year,
            step,
        })?;
        self.year = year;
        Ok(year)
    }
}
