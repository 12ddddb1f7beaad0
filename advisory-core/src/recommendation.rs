//! Response assembly for a matched crop rule.

use serde::Serialize;

use crate::explanation::{explain, title_case};
use crate::income::estimate_income;
use crate::resolver::AdvisoryRequest;
use crate::tables::{CropRule, ReferenceTables};
use crate::yields::average_yield;

/// Placeholder for fields whose cross-reference row is missing
pub const NOT_AVAILABLE: &str = "N/A";

/// The record handed to whatever renders the advisory
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    /// Title-cased crop name
    pub crop: String,
    pub fertilizer: String,
    pub quantity: String,
    /// Raw yield text, e.g. "20–25 quintals/acre"
    pub expected_yield: String,
    pub income: String,
    pub explanation: String,
}

impl Recommendation {
    /// Build the response for `rule`.
    ///
    /// Missing fertilizer, yield or price rows degrade the affected fields
    /// only; assembly itself never fails. `request` must already be normalized.
    pub fn assemble(rule: &CropRule, request: &AdvisoryRequest, tables: &ReferenceTables) -> Self {
        let crop = rule.crop.as_str();

        let fert = tables.fertilizer_for(crop);
        let yld = tables.yield_for(crop);
        let price = tables.price_for(crop);

        if fert.is_none() || yld.is_none() || price.is_none() {
            tracing::debug!(
                crop,
                fertilizer = fert.is_some(),
                yield_row = yld.is_some(),
                price = price.is_some(),
                "incomplete reference data"
            );
        }

        let avg = yld.and_then(|y| average_yield(&y.expected_yield));
        let income = estimate_income(avg, price);

        Self {
            crop: title_case(crop),
            fertilizer: fert.map_or(NOT_AVAILABLE, |f| f.fertilizer.as_str()).to_string(),
            quantity: fert.map_or(NOT_AVAILABLE, |f| f.quantity.as_str()).to_string(),
            expected_yield: yld.map_or(NOT_AVAILABLE, |y| y.expected_yield.as_str()).to_string(),
            income: income.to_string(),
            explanation: explain(&request.soil, &request.season, &request.rainfall, crop),
        }
    }
}
