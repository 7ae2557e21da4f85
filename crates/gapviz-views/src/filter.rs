//! Pure queries over the dataset
//!
//! Nothing here mutates or caches; the same dataset and arguments always give
//! the same answer. Combinations without a record are absent from the output,
//! never filled with zero.

use ahash::AHashMap;
use gapviz_core::{RegionId, SelectionDomain, SelectionState, Year};
use gapviz_data::{Dataset, MeasurementRecord};
use indexmap::IndexMap;

/// Per-region time series, in dataset region order
pub type RegionSeries<'a> = IndexMap<RegionId, Vec<&'a MeasurementRecord>>;

#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> FilterEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Records for one (year, level) pair, in dataset order
    pub fn by_year_and_level(&self, year: Year, level: &str) -> Vec<&'a MeasurementRecord> {
        let rows = self.dataset.index().level_year_rows(level, year);
        self.dataset.rows(rows).collect()
    }

    /// Records for the selection's year and level
    pub fn for_selection(&self, selection: &SelectionState) -> Vec<&'a MeasurementRecord> {
        self.by_year_and_level(selection.year(), selection.level().as_str())
    }

    /// All years of a level, grouped by region, each group ascending by year
    pub fn by_level(&self, level: &str) -> RegionSeries<'a> {
        let rows = self.dataset.index().level_rows(level);

        let mut groups: AHashMap<&RegionId, Vec<&'a MeasurementRecord>> = AHashMap::new();
        for record in self.dataset.rows(rows) {
            groups.entry(&record.region).or_default().push(record);
        }

        let mut series = RegionSeries::with_capacity(groups.len());
        for region in self.dataset.regions() {
            if let Some(mut records) = groups.remove(region) {
                records.sort_by_key(|r| r.year);
                series.insert(region.clone(), records);
            }
        }
        series
    }

    /// One region's time series for a level, ascending by year
    pub fn by_region_and_level(&self, region: &str, level: &str) -> Vec<&'a MeasurementRecord> {
        let rows = self.dataset.index().level_rows(level);
        let mut records: Vec<_> = self
            .dataset
            .rows(rows)
            .filter(|r| r.region == region)
            .collect();
        records.sort_by_key(|r| r.year);
        records
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const REGIONS: &[&str] = &["EAP", "SA", "SSA"];
    const LEVELS: &[&str] = &["primary", "secondary", "tertiary"];

    fn records() -> impl Strategy<Value = Vec<MeasurementRecord>> {
        prop::collection::vec(
            (0..REGIONS.len(), 0..LEVELS.len(), 2010i32..2024, -15.0f64..15.0),
            1..60,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(r, l, year, gap)| MeasurementRecord::new(REGIONS[r], LEVELS[l], year, gap))
                .collect()
        })
    }

    proptest! {
        /// Every record returned matches the queried year and level.
        #[test]
        fn by_year_and_level_has_no_cross_contamination(
            records in records(),
            year in 2010i32..2024,
            level in 0..LEVELS.len(),
        ) {
            let dataset = Dataset::new(records, Vec::new()).unwrap();
            let engine = FilterEngine::new(&dataset);
            let level = LEVELS[level];

            let found = engine.by_year_and_level(year, level);
            for record in &found {
                prop_assert_eq!(record.year, year);
                prop_assert_eq!(record.level.as_str(), level);
            }

            let expected = dataset
                .records()
                .iter()
                .filter(|r| r.year == year && r.level == level)
                .count();
            prop_assert_eq!(found.len(), expected);
        }

        /// Region series are strictly ascending by year.
        #[test]
        fn by_region_and_level_is_strictly_ascending(
            records in records(),
            region in 0..REGIONS.len(),
            level in 0..LEVELS.len(),
        ) {
            let dataset = Dataset::new(records, Vec::new()).unwrap();
            let series = FilterEngine::new(&dataset).by_region_and_level(REGIONS[region], LEVELS[level]);
            for pair in series.windows(2) {
                prop_assert!(pair[0].year < pair[1].year);
            }
        }
    }
}
