//! Immutable in-memory dataset

use ahash::{AHashMap, AHashSet};
use gapviz_core::{LevelId, RegionId, SelectionDomain, SelectionError, SelectionState, Year};
use indexmap::IndexSet;

use crate::config::DatasetConfig;
use crate::index::DataIndex;
use crate::record::{CountryRegionEntry, MeasurementRecord, RawMeasurement};
use crate::DataError;

/// Measurement records plus the country to region lookup
///
/// Built once after both input documents are loaded and never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<MeasurementRecord>,
    geography: Vec<CountryRegionEntry>,
    country_regions: AHashMap<String, RegionId>,
    years: Vec<Year>,
    levels: Vec<LevelId>,
    regions: Vec<RegionId>,
    index: DataIndex,
    preferred_year: Option<Year>,
}

impl Dataset {
    /// Normalize raw rows and build the dataset
    pub fn from_raw(
        raw: Vec<RawMeasurement>,
        geography: Vec<CountryRegionEntry>,
        config: &DatasetConfig,
    ) -> Result<Self, DataError> {
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(row, raw)| MeasurementRecord::from_raw(row, raw, config.negate_gender_gap))
            .collect::<Result<Vec<_>, _>>()?;

        let mut dataset = Self::new(records, geography)?;
        dataset.preferred_year = config.preferred_year;
        Ok(dataset)
    }

    /// Build a dataset from already normalized records
    ///
    /// Later duplicates of a (region, level, year) combination are dropped.
    pub fn new(records: Vec<MeasurementRecord>, geography: Vec<CountryRegionEntry>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let mut seen = AHashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            let key = (record.region.clone(), record.level.clone(), record.year);
            if seen.insert(key) {
                kept.push(record);
            } else {
                tracing::warn!(
                    "Dropping duplicate measurement for {} / {} / {}",
                    record.region,
                    record.level,
                    record.year
                );
            }
        }

        let mut years: Vec<Year> = kept.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();

        let levels: IndexSet<LevelId> = kept.iter().map(|r| r.level.clone()).collect();
        let regions: IndexSet<RegionId> = kept.iter().map(|r| r.region.clone()).collect();

        // First mapping wins for countries listed more than once
        let mut country_regions = AHashMap::with_capacity(geography.len());
        for entry in &geography {
            country_regions
                .entry(entry.country.clone())
                .or_insert_with(|| entry.region.clone());
        }

        let index = DataIndex::build(&kept);

        tracing::info!(
            "Dataset ready: {} records, {} years, {} levels, {} regions, {} countries",
            kept.len(),
            years.len(),
            levels.len(),
            regions.len(),
            country_regions.len()
        );

        Ok(Self {
            records: kept,
            geography,
            country_regions,
            years,
            levels: levels.into_iter().collect(),
            regions: regions.into_iter().collect(),
            index,
            preferred_year: None,
        })
    }

    /// Set the year the initial selection should prefer
    pub fn with_preferred_year(mut self, year: Option<Year>) -> Self {
        self.preferred_year = year;
        self
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    /// Resolve record rows produced by the index
    pub fn rows<'a>(&'a self, rows: &'a [usize]) -> impl Iterator<Item = &'a MeasurementRecord> + 'a {
        rows.iter().filter_map(move |&row| self.records.get(row))
    }

    pub fn geography(&self) -> &[CountryRegionEntry] {
        &self.geography
    }

    /// Region a country belongs to, if the geography lists it
    pub fn region_of(&self, country: &str) -> Option<&RegionId> {
        self.country_regions.get(country)
    }

    /// Position of a region in first-seen order
    pub fn region_position(&self, region: &str) -> Option<usize> {
        self.regions.iter().position(|r| r == region)
    }

    pub fn index(&self) -> &DataIndex {
        &self.index
    }

    pub fn preferred_year(&self) -> Option<Year> {
        self.preferred_year
    }

    /// Selection entered when the dashboard first renders
    pub fn initial_selection(&self) -> Result<SelectionState, SelectionError> {
        SelectionState::initial(self, self.preferred_year)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SelectionDomain for Dataset {
    fn years(&self) -> &[Year] {
        &self.years
    }

    fn levels(&self) -> &[LevelId] {
        &self.levels
    }

    fn regions(&self) -> &[RegionId] {
        &self.regions
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const REGIONS: &[&str] = &["EAP", "SA", "SSA", "LAC"];
    const LEVELS: &[&str] = &["primary", "secondary", "tertiary"];

    fn records() -> impl Strategy<Value = Vec<MeasurementRecord>> {
        prop::collection::vec(
            (0..REGIONS.len(), 0..LEVELS.len(), 2010i32..2020, -15.0f64..15.0),
            1..50,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(r, l, year, gap)| MeasurementRecord::new(REGIONS[r], LEVELS[l], year, gap))
                .collect()
        })
    }

    fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        let mut seen = Vec::new();
        for value in values {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }

    proptest! {
        /// Each (region, level, year) combination survives exactly once, as its first row.
        #[test]
        fn records_are_unique_and_first_wins(records in records()) {
            let dataset = Dataset::new(records.clone(), Vec::new()).unwrap();

            let mut keys = AHashSet::new();
            for record in dataset.records() {
                prop_assert!(keys.insert((record.region.clone(), record.level.clone(), record.year)));
                let first = records
                    .iter()
                    .find(|r| r.region == record.region && r.level == record.level && r.year == record.year);
                prop_assert_eq!(first, Some(record));
            }
        }

        /// Years are strictly ascending; levels and regions keep first-seen order.
        #[test]
        fn domain_orders_hold(records in records()) {
            let dataset = Dataset::new(records.clone(), Vec::new()).unwrap();

            for pair in dataset.years().windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }

            let levels: Vec<&str> = dataset.levels().iter().map(LevelId::as_str).collect();
            prop_assert_eq!(levels, first_seen(records.iter().map(|r| r.level.as_str())));

            let regions: Vec<&str> = dataset.regions().iter().map(RegionId::as_str).collect();
            prop_assert_eq!(regions, first_seen(records.iter().map(|r| r.region.as_str())));
        }
    }
}
