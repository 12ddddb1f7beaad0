//! Crop rule resolution.
//!
//! Three tiers, tried in order, each a first-match-wins scan over the rule
//! table in its natural order:
//! 1) climate-resilient override (only in climate mode): soil + resilient crop
//! 2) exact: soil + season + rainfall
//! 3) fallback: soil + season
//!
//! No hit in any tier is a normal outcome (`Resolution::NoMatch`), not an error.

use serde::Serialize;

use crate::recommendation::Recommendation;
use crate::tables::{CropRule, ReferenceTables};

/// Crops eligible for the climate-resilient override
pub const RESILIENT_CROPS: [&str; 3] = ["millets", "bajra", "pulses"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryRequest {
    pub soil: String,
    pub season: String,
    pub rainfall: String,
    pub climate_mode: bool,
}

impl AdvisoryRequest {
    pub fn new(
        soil: impl Into<String>,
        season: impl Into<String>,
        rainfall: impl Into<String>,
        climate_mode: bool,
    ) -> Self {
        Self {
            soil: soil.into(),
            season: season.into(),
            rainfall: rainfall.into(),
            climate_mode,
        }
    }

    /// Trimmed, lowercase copy; rule tables store these keys lowercase.
    pub fn normalized(&self) -> Self {
        Self {
            soil: normalize(&self.soil),
            season: normalize(&self.season),
            rainfall: normalize(&self.rainfall),
            climate_mode: self.climate_mode,
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Which tier produced the matched rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchTier {
    #[serde(rename = "climate-override")]
    ClimateOverride,
    #[serde(rename = "exact")]
    Exact,
    #[serde(rename = "soil-season")]
    SoilSeason,
}

impl MatchTier {
    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::ClimateOverride => "climate-resilient override",
            MatchTier::Exact => "exact match",
            MatchTier::SoilSeason => "soil + season fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Matched {
        tier: MatchTier,
        recommendation: Recommendation,
    },
    NoMatch,
}

impl Resolution {
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Resolution::Matched { recommendation, .. } => Some(recommendation),
            Resolution::NoMatch => None,
        }
    }

    pub fn tier(&self) -> Option<MatchTier> {
        match self {
            Resolution::Matched { tier, .. } => Some(*tier),
            Resolution::NoMatch => None,
        }
    }

    pub fn into_recommendation(self) -> Option<Recommendation> {
        match self {
            Resolution::Matched { recommendation, .. } => Some(recommendation),
            Resolution::NoMatch => None,
        }
    }
}

/// Find the rule row for an already-normalized request.
///
/// The climate override ignores season and rainfall entirely.
pub fn find_rule<'a>(request: &AdvisoryRequest, rules: &'a [CropRule]) -> Option<(MatchTier, &'a CropRule)> {
    if request.climate_mode {
        if let Some(r) = rules
            .iter()
            .find(|r| r.soil == request.soil && RESILIENT_CROPS.contains(&r.crop.as_str()))
        {
            return Some((MatchTier::ClimateOverride, r));
        }
    }

    if let Some(r) = rules.iter().find(|r| {
        r.soil == request.soil && r.season == request.season && r.rainfall == request.rainfall
    }) {
        return Some((MatchTier::Exact, r));
    }

    rules
        .iter()
        .find(|r| r.soil == request.soil && r.season == request.season)
        .map(|r| (MatchTier::SoilSeason, r))
}

/// Resolve a request against one snapshot of the reference tables.
pub fn resolve(request: &AdvisoryRequest, tables: &ReferenceTables) -> Resolution {
    let request = request.normalized();

    let Some((tier, rule)) = find_rule(&request, &tables.rules) else {
        tracing::debug!(
            soil = %request.soil,
            season = %request.season,
            rainfall = %request.rainfall,
            climate_mode = request.climate_mode,
            "no crop rule matched"
        );
        return Resolution::NoMatch;
    };

    tracing::debug!(crop = %rule.crop, tier = tier.label(), "crop rule matched");

    Resolution::Matched {
        tier,
        recommendation: Recommendation::assemble(rule, &request, tables),
    }
}
