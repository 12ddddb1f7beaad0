//! Expected-yield text parsing.
//!
//! Yield cells look like "20–25 quintals/acre": a numeric range joined by an
//! en-dash, then free unit text. Only that exact shape yields an average; a
//! plain hyphen or any other wording is reported as unparseable.

use thiserror::Error;

/// Separator between the low and high ends of a yield range (U+2013)
pub const RANGE_SEPARATOR: char = '–';

#[derive(Debug, Clone, PartialEq, Error)]
pub enum YieldParseError {
    #[error("yield text is empty")]
    Empty,
    #[error("no en-dash separated range in {0:?}")]
    MissingSeparator(String),
    #[error("invalid number {0:?} in yield range")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldRange {
    pub low: f64,
    pub high: f64,
}

impl YieldRange {
    pub fn average(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Parse the leading "<low>–<high>" token of a yield cell.
pub fn parse_yield_range(text: &str) -> Result<YieldRange, YieldParseError> {
    let token = text.split_whitespace().next().ok_or(YieldParseError::Empty)?;

    let mut parts = token.split(RANGE_SEPARATOR);
    let (Some(low), Some(high), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(YieldParseError::MissingSeparator(token.to_string()));
    };

    Ok(YieldRange {
        low: parse_number(low)?,
        high: parse_number(high)?,
    })
}

/// Finite numbers only; `f64::from_str` also accepts "NaN" and "inf".
fn parse_number(s: &str) -> Result<f64, YieldParseError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| YieldParseError::InvalidNumber(s.to_string()))
}

/// Average of the yield range, or `None` when the text does not parse
pub fn average_yield(text: &str) -> Option<f64> {
    match parse_yield_range(text) {
        Ok(range) => Some(range.average()),
        Err(err) => {
            tracing::debug!(%err, "yield average unavailable");
            None
        }
    }
}
