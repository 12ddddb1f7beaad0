//! CSV readers for the four reference tables.
//!
//! Every file has a header row naming the columns; extra columns are ignored
//! and cells are trimmed. Rows keep file order, which the resolver relies on.

use advisory_core::{CropRule, FertilizerRow, PriceRow, YieldRow};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read every row of a headered CSV file into `T`.
pub fn load_table<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<T>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let row = result.with_context(|| format!("{}: row {}", path.display(), i + 2))?;
        rows.push(row);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}

pub fn load_crop_rules(path: impl AsRef<Path>) -> Result<Vec<CropRule>> {
    load_table(path)
}

pub fn load_fertilizers(path: impl AsRef<Path>) -> Result<Vec<FertilizerRow>> {
    load_table(path)
}

pub fn load_yields(path: impl AsRef<Path>) -> Result<Vec<YieldRow>> {
    load_table(path)
}

pub fn load_prices(path: impl AsRef<Path>) -> Result<Vec<PriceRow>> {
    load_table(path)
}
