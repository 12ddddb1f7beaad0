//! Yield comparison across the crops listed for a soil.
//!
//! Feeds the yield chart shown next to a recommendation: one bar per crop
//! with a parseable yield range, recommended crop highlighted.

use crate::tables::ReferenceTables;
use crate::yields::average_yield;

#[derive(Debug, Clone, PartialEq)]
pub struct YieldBar {
    pub crop: String,
    /// quintals/acre
    pub average_yield: f64,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldComparison {
    pub soil: String,
    pub bars: Vec<YieldBar>,
}

impl YieldComparison {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_yield(&self) -> Option<f64> {
        self.bars.iter().map(|b| b.average_yield).reduce(f64::max)
    }

    pub fn highlighted(&self) -> Option<&YieldBar> {
        self.bars.iter().find(|b| b.highlighted)
    }
}

/// Bars in rule-table order; a crop listed twice for the soil is charted once.
pub fn compare_yields(soil: &str, recommended_crop: Option<&str>, tables: &ReferenceTables) -> YieldComparison {
    let soil = soil.trim().to_lowercase();
    let recommended = recommended_crop.map(|c| c.trim().to_lowercase());

    let mut bars: Vec<YieldBar> = Vec::new();
    for rule in tables.rules_for_soil(&soil) {
        if bars.iter().any(|b| b.crop == rule.crop) {
            continue;
        }
        let Some(avg) = tables
            .yield_for(&rule.crop)
            .and_then(|y| average_yield(&y.expected_yield))
        else {
            continue;
        };
        bars.push(YieldBar {
            crop: rule.crop.clone(),
            average_yield: avg,
            highlighted: recommended.as_deref() == Some(rule.crop.as_str()),
        });
    }

    YieldComparison { soil, bars }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::fixtures::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bars_for_soil_in_table_order() {
        let tables = sample_tables();
        let cmp = compare_yields("Black", Some("Bajra"), &tables);

        // gram and pulses have no yield rows in the fixture
        let crops: Vec<&str> = cmp.bars.iter().map(|b| b.crop.as_str()).collect();
        assert_eq!(crops, vec!["cotton", "bajra"]);
        assert_relative_eq!(cmp.bars[0].average_yield, 9.0);
        assert_eq!(cmp.highlighted().unwrap().crop, "bajra");
        assert!(!cmp.bars[0].highlighted);
        assert_relative_eq!(cmp.max_yield().unwrap(), 10.0);
    }

    #[test]
    fn test_unparseable_yield_is_skipped() {
        let tables = sample_tables();
        // rice uses a hyphen, wheat parses
        let cmp = compare_yields("alluvial", None, &tables);
        let crops: Vec<&str> = cmp.bars.iter().map(|b| b.crop.as_str()).collect();
        assert_eq!(crops, vec!["wheat"]);
        assert!(cmp.highlighted().is_none());
    }

    #[test]
    fn test_duplicate_crop_charted_once() {
        let mut tables = sample_tables();
        tables.rules.push(rule("black", "zaid", "low", "cotton"));
        let cmp = compare_yields("black", None, &tables);
        assert_eq!(cmp.bars.iter().filter(|b| b.crop == "cotton").count(), 1);
    }

    #[test]
    fn test_unknown_soil_is_empty() {
        let tables = sample_tables();
        let cmp = compare_yields("peat", Some("rice"), &tables);
        assert!(cmp.is_empty());
        assert!(cmp.max_yield().is_none());
    }
}
