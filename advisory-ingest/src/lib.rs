//! advisory-ingest: loads the reference tables from CSV files on disk.

pub mod loader;
pub mod source;

pub use loader::{load_crop_rules, load_fertilizers, load_prices, load_table, load_yields};
pub use source::{CsvTableSource, CROP_RULES_FILE, FERTILIZER_FILE, MARKET_PRICE_FILE, YIELD_FILE};
