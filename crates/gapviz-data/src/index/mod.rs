//! Row indices for the filter queries

use ahash::AHashMap;
use gapviz_core::{LevelId, Year};

use crate::record::MeasurementRecord;

/// Index from level (and year within a level) to record rows
///
/// Row lists keep dataset insertion order.
#[derive(Debug, Clone, Default)]
pub struct DataIndex {
    /// Level -> all rows for that level
    level_rows: AHashMap<LevelId, Vec<usize>>,
    /// Level -> year -> rows
    level_year_rows: AHashMap<LevelId, AHashMap<Year, Vec<usize>>>,
}

impl DataIndex {
    /// Build the index over `records`
    pub fn build(records: &[MeasurementRecord]) -> Self {
        let mut index = Self::default();
        for (row, record) in records.iter().enumerate() {
            index.add_entry(record, row);
        }
        index
    }

    fn add_entry(&mut self, record: &MeasurementRecord, row: usize) {
        self.level_rows
            .entry(record.level.clone())
            .or_insert_with(Vec::new)
            .push(row);
        self.level_year_rows
            .entry(record.level.clone())
            .or_insert_with(AHashMap::new)
            .entry(record.year)
            .or_insert_with(Vec::new)
            .push(row);
    }

    /// Rows for a level, across all years
    pub fn level_rows(&self, level: &str) -> &[usize] {
        self.level_rows.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rows for a single (year, level) pair
    pub fn level_year_rows(&self, level: &str, year: Year) -> &[usize] {
        self.level_year_rows
            .get(level)
            .and_then(|years| years.get(&year))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
