//! Demo mode
//! Synthetic gender gap data for the seven World Bank regions

use async_trait::async_trait;
use gapviz_core::Year;
use gapviz_data::{CountryRegionEntry, DataError, DatasetSource, RawMeasurement};

const REGIONS: &[(&str, f64, &[&str])] = &[
    ("East Asia and Pacific (WB)", -1.5, &["China", "Indonesia", "Viet Nam", "Australia"]),
    ("Europe and Central Asia (WB)", -4.0, &["France", "Germany", "Poland", "Kazakhstan"]),
    ("Latin America and Caribbean (WB)", -6.0, &["Brazil", "Mexico", "Peru", "Colombia"]),
    ("Middle East and North Africa (WB)", 2.5, &["Egypt", "Morocco", "Jordan", "Iran"]),
    ("North America (WB)", -5.0, &["United States", "Canada"]),
    ("South Asia (WB)", 4.0, &["India", "Pakistan", "Bangladesh", "Nepal"]),
    ("Sub-Saharan Africa (WB)", 8.0, &["Nigeria", "Chad", "Kenya", "Ethiopia", "Niger"]),
];

const LEVELS: &[(&str, f64)] = &[
    ("Primary", 0.0),
    ("Lower secondary", 1.5),
    ("Upper secondary", 3.0),
    ("Tertiary", -4.0),
];

const FIRST_YEAR: Year = 2010;
const LAST_YEAR: Year = 2022;

/// Data source that generates synthetic data
///
/// Values use the raw sign convention of the real documents, so they go
/// through the same negation on load.
#[derive(Debug, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }

    fn generate(&self) -> Vec<RawMeasurement> {
        let mut rows = Vec::with_capacity(REGIONS.len() * LEVELS.len() * (LAST_YEAR - FIRST_YEAR + 1) as usize);

        for (region_idx, (region, base, _)) in REGIONS.iter().enumerate() {
            for (level, offset) in LEVELS {
                for year in FIRST_YEAR..=LAST_YEAR {
                    let t = f64::from(year - FIRST_YEAR);
                    // Gaps narrow over time, with a small regional wobble
                    let trend = (base + offset) * (1.0 - t / 30.0);
                    let wobble = 0.6 * (t * 0.9 + region_idx as f64).sin();
                    let gap = ((trend + wobble) * 10.0).round() / 10.0;

                    rows.push(RawMeasurement {
                        region: region.to_string(),
                        level: level.to_string(),
                        year,
                        gender_gap: -gap,
                    });
                }
            }
        }

        // Not every region reports tertiary data in the early years
        rows.retain(|r| !(r.level == "Tertiary" && r.year < 2013 && r.region.starts_with("Sub-Saharan")));
        rows
    }
}

#[async_trait]
impl DatasetSource for DemoSource {
    async fn measurements(&self) -> Result<Vec<RawMeasurement>, DataError> {
        Ok(self.generate())
    }

    async fn geography(&self) -> Result<Vec<CountryRegionEntry>, DataError> {
        Ok(REGIONS
            .iter()
            .flat_map(|(region, _, countries)| {
                countries
                    .iter()
                    .map(move |country| CountryRegionEntry::new(*country, *region))
            })
            .collect())
    }

    fn source_name(&self) -> &str {
        "demo"
    }
}
