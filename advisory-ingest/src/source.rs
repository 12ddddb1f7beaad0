//! Directory-backed table source.
//!
//! Expected layout:
//!   <dir>/crop_rules.csv     soil,season,rainfall,crop
//!   <dir>/fertilizer.csv     crop,fertilizer,quantity
//!   <dir>/yield.csv          crop,expected_yield
//!   <dir>/market_price.csv   crop,market_price,unit

use advisory_core::{ReferenceTables, TableSource};
use anyhow::Result;
use std::path::PathBuf;

use crate::loader::{load_crop_rules, load_fertilizers, load_prices, load_yields};

pub const CROP_RULES_FILE: &str = "crop_rules.csv";
pub const FERTILIZER_FILE: &str = "fertilizer.csv";
pub const YIELD_FILE: &str = "yield.csv";
pub const MARKET_PRICE_FILE: &str = "market_price.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTableSource {
    dir: PathBuf,
}

impl CsvTableSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl TableSource for CsvTableSource {
    /// Re-reads all four files on every call.
    fn load_tables(&self) -> Result<ReferenceTables> {
        let rules = load_crop_rules(self.file(CROP_RULES_FILE))?;
        let fertilizers = load_fertilizers(self.file(FERTILIZER_FILE))?;
        let yields = load_yields(self.file(YIELD_FILE))?;
        let prices = load_prices(self.file(MARKET_PRICE_FILE))?;

        tracing::debug!(
            dir = %self.dir.display(),
            rules = rules.len(),
            fertilizers = fertilizers.len(),
            yields = yields.len(),
            prices = prices.len(),
            "reference tables loaded"
        );

        Ok(ReferenceTables::new(rules, fertilizers, yields, prices))
    }
}
