//! Reference table rows and the snapshot the resolver reads from.
//!
//! Four flat tables: crop rules, fertilizer guide, yield ranges and market
//! prices. `crop` is the join key between them. Row order is significant:
//! every lookup returns the first row that matches.

use anyhow::Result;
use serde::Deserialize;

/// One (soil, season, rainfall) -> crop entry
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CropRule {
    pub soil: String,
    pub season: String,
    pub rainfall: String,
    pub crop: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FertilizerRow {
    pub crop: String,
    pub fertilizer: String,
    pub quantity: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct YieldRow {
    pub crop: String,
    /// Free text such as "20–25 quintals/acre"
    pub expected_yield: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PriceRow {
    pub crop: String,
    /// Kept as text; only parsed when an income figure is derived
    pub market_price: String,
    pub unit: String,
}

/// Immutable snapshot of all four reference tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTables {
    pub rules: Vec<CropRule>,
    pub fertilizers: Vec<FertilizerRow>,
    pub yields: Vec<YieldRow>,
    pub prices: Vec<PriceRow>,
}

impl ReferenceTables {
    pub fn new(
        rules: Vec<CropRule>,
        fertilizers: Vec<FertilizerRow>,
        yields: Vec<YieldRow>,
        prices: Vec<PriceRow>,
    ) -> Self {
        Self {
            rules,
            fertilizers,
            yields,
            prices,
        }
    }

    pub fn fertilizer_for(&self, crop: &str) -> Option<&FertilizerRow> {
        self.fertilizers.iter().find(|f| f.crop == crop)
    }

    pub fn yield_for(&self, crop: &str) -> Option<&YieldRow> {
        self.yields.iter().find(|y| y.crop == crop)
    }

    pub fn price_for(&self, crop: &str) -> Option<&PriceRow> {
        self.prices.iter().find(|p| p.crop == crop)
    }

    /// Rule rows for a soil, in table order
    pub fn rules_for_soil<'a>(&'a self, soil: &'a str) -> impl Iterator<Item = &'a CropRule> + 'a {
        self.rules.iter().filter(move |r| r.soil == soil)
    }
}

/// Anything that can hand the resolver a consistent snapshot of the tables.
///
/// Each call returns a fresh snapshot; reloading is simply calling again.
pub trait TableSource {
    fn load_tables(&self) -> Result<ReferenceTables>;
}

impl TableSource for ReferenceTables {
    fn load_tables(&self) -> Result<ReferenceTables> {
        Ok(self.clone())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn rule(soil: &str, season: &str, rainfall: &str, crop: &str) -> CropRule {
        CropRule {
            soil: soil.to_string(),
            season: season.to_string(),
            rainfall: rainfall.to_string(),
            crop: crop.to_string(),
        }
    }

    pub fn fertilizer(crop: &str, fertilizer: &str, quantity: &str) -> FertilizerRow {
        FertilizerRow {
            crop: crop.to_string(),
            fertilizer: fertilizer.to_string(),
            quantity: quantity.to_string(),
        }
    }

    pub fn yield_row(crop: &str, expected_yield: &str) -> YieldRow {
        YieldRow {
            crop: crop.to_string(),
            expected_yield: expected_yield.to_string(),
        }
    }

    pub fn price(crop: &str, market_price: &str, unit: &str) -> PriceRow {
        PriceRow {
            crop: crop.to_string(),
            market_price: market_price.to_string(),
            unit: unit.to_string(),
        }
    }

    /// Small table set shared by the module tests
    pub fn sample_tables() -> ReferenceTables {
        ReferenceTables::new(
            vec![
                rule("black", "kharif", "medium", "cotton"),
                rule("black", "kharif", "low", "bajra"),
                rule("black", "rabi", "medium", "gram"),
                rule("black", "rabi", "low", "pulses"),
                rule("alluvial", "rabi", "medium", "wheat"),
                rule("alluvial", "kharif", "high", "rice"),
                rule("clay", "rabi", "low", "linseed"),
            ],
            vec![
                fertilizer("cotton", "NPK 10:26:26", "50 kg/acre"),
                fertilizer("bajra", "Urea", "25 kg/acre"),
                fertilizer("wheat", "Urea + DAP", "55 kg/acre"),
                fertilizer("wheat", "Ignored duplicate", "0 kg/acre"),
            ],
            vec![
                yield_row("cotton", "8–10 quintals/acre"),
                yield_row("bajra", "8–12 quintals/acre"),
                yield_row("wheat", "20–25 quintals/acre"),
                yield_row("rice", "18-22 quintals/acre"),
            ],
            vec![
                price("cotton", "6620", "₹/quintal"),
                price("bajra", "2500", "₹/quintal"),
                price("wheat", "2000", "₹/quintal"),
                price("rice", "2183", "₹/quintal"),
            ],
        )
    }
}
