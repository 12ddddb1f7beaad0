//! Income estimate derived from average yield and market price.

use std::fmt;

use crate::tables::PriceRow;

/// The only price unit an income per acre can be computed from
pub const QUINTAL_PRICE_UNIT: &str = "₹/quintal";

#[derive(Debug, Clone, PartialEq)]
pub enum IncomeEstimate {
    /// Rupees per acre, already rounded
    PerAcre(i64),
    /// Raw price cell and unit, shown when no per-acre figure is possible
    MarketPrice { price: String, unit: String },
    NotAvailable,
}

impl fmt::Display for IncomeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncomeEstimate::PerAcre(amount) => write!(f, "₹ {} / acre", group_thousands(*amount)),
            IncomeEstimate::MarketPrice { price, unit } => {
                write!(f, "Market price: ₹{} ({})", price, unit)
            }
            IncomeEstimate::NotAvailable => write!(f, "Not available"),
        }
    }
}

/// Derive the income display for a crop.
///
/// Per acre needs all three: an average yield, a price quoted in
/// `QUINTAL_PRICE_UNIT`, and a finite numeric price cell. Any price row
/// that misses one of those is shown raw instead.
pub fn estimate_income(avg_yield: Option<f64>, price: Option<&PriceRow>) -> IncomeEstimate {
    let Some(price) = price else {
        return IncomeEstimate::NotAvailable;
    };

    if let Some(avg) = avg_yield.filter(|a| a.is_finite()) {
        if price.unit == QUINTAL_PRICE_UNIT {
            let per_acre = price
                .market_price
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .map(|p| (avg * p).round())
                .filter(|amount| amount.is_finite() && amount.abs() < i64::MAX as f64);
            match per_acre {
                Some(amount) => return IncomeEstimate::PerAcre(amount as i64),
                None => {
                    tracing::debug!(crop = %price.crop, price = %price.market_price, "market price is not a usable number");
                }
            }
        }
    }

    IncomeEstimate::MarketPrice {
        price: price.market_price.clone(),
        unit: price.unit.clone(),
    }
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
