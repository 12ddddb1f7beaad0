//! Terminal rendering of advisories and yield charts.

use advisory_core::{MatchTier, Recommendation, Resolution, YieldComparison};
use serde::Serialize;

pub const NO_ADVISORY: &str = "No advisory available for this combination.";

const BAR_WIDTH: usize = 40;

pub fn format_recommendation(rec: &Recommendation, tier: MatchTier) -> String {
    let mut out = String::new();
    out.push_str(&format!("Recommended Crop: {}\n", rec.crop));
    out.push_str(&format!("Fertilizer: {}\n", rec.fertilizer));
    out.push_str(&format!("Quantity: {}\n", rec.quantity));
    out.push_str(&format!("Expected Yield: {}\n", rec.expected_yield));
    out.push_str(&format!("Estimated Income: {}\n", rec.income));
    out.push_str(&format!("Matched by: {}\n", tier.label()));
    out.push('\n');
    out.push_str(&rec.explanation);
    out.push('\n');
    out
}

/// `--json` shape; both fields are null when nothing matched.
#[derive(Debug, Serialize)]
struct JsonAdvisory<'a> {
    tier: Option<MatchTier>,
    recommendation: Option<&'a Recommendation>,
}

pub fn format_json(resolution: &Resolution) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonAdvisory {
        tier: resolution.tier(),
        recommendation: resolution.recommendation(),
    })
}

/// Horizontal bar chart; the highlighted crop is marked with '*'.
pub fn format_comparison(cmp: &YieldComparison) -> String {
    if cmp.is_empty() {
        return format!("No yield data for {} soil.\n", cmp.soil);
    }
    let Some(max) = cmp.max_yield().filter(|m| *m > 0.0) else {
        return format!("No yield data for {} soil.\n", cmp.soil);
    };

    let label_width = cmp.bars.iter().map(|b| b.crop.chars().count()).max().unwrap_or(0);

    let mut out = format!("Yield comparison for {} soil (avg quintals/acre)\n", cmp.soil);
    for bar in &cmp.bars {
        let len = ((bar.average_yield / max) * BAR_WIDTH as f64).round() as usize;
        let len = if bar.average_yield > 0.0 { len.max(1) } else { 0 };
        out.push_str(&format!(
            "{} {:<width$} | {:<bar_width$} {:.1}\n",
            if bar.highlighted { '*' } else { ' ' },
            bar.crop,
            "#".repeat(len),
            bar.average_yield,
            width = label_width,
            bar_width = BAR_WIDTH,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisory_core::YieldBar;

    fn bar(crop: &str, avg: f64, highlighted: bool) -> YieldBar {
        YieldBar {
            crop: crop.to_string(),
            average_yield: avg,
            highlighted,
        }
    }

    #[test]
    fn test_recommendation_lines() {
        let rec = Recommendation {
            crop: "Bajra".to_string(),
            fertilizer: "Urea".to_string(),
            quantity: "25 kg/acre".to_string(),
            expected_yield: "8–12 quintals/acre".to_string(),
            income: "₹ 25,000 / acre".to_string(),
            explanation: "Bajra is recommended because it performs well in low rainfall.".to_string(),
        };
        let text = format_recommendation(&rec, MatchTier::ClimateOverride);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Recommended Crop: Bajra");
        assert_eq!(lines[4], "Estimated Income: ₹ 25,000 / acre");
        assert_eq!(lines[5], "Matched by: climate-resilient override");
        assert_eq!(lines[7], rec.explanation);
    }

    #[test]
    fn test_json_carries_tier() {
        let rec = Recommendation {
            crop: "Wheat".to_string(),
            fertilizer: "Urea + DAP".to_string(),
            quantity: "55 kg/acre".to_string(),
            expected_yield: "20–25 quintals/acre".to_string(),
            income: "₹ 45,000 / acre".to_string(),
            explanation: "Wheat is recommended because the temperature is suitable for Rabi season.".to_string(),
        };
        let res = Resolution::Matched {
            tier: MatchTier::SoilSeason,
            recommendation: rec,
        };
        let v: serde_json::Value = serde_json::from_str(&format_json(&res).unwrap()).unwrap();
        assert_eq!(v["tier"], "soil-season");
        assert_eq!(v["recommendation"]["crop"], "Wheat");
    }

    #[test]
    fn test_json_no_match() {
        let v: serde_json::Value = serde_json::from_str(&format_json(&Resolution::NoMatch).unwrap()).unwrap();
        assert!(v["tier"].is_null());
        assert!(v["recommendation"].is_null());
    }

    #[test]
    fn test_comparison_chart() {
        let cmp = YieldComparison {
            soil: "black".to_string(),
            bars: vec![bar("cotton", 5.0, false), bar("bajra", 10.0, true)],
        };
        let text = format_comparison(&cmp);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  cotton | "));
        assert!(lines[2].starts_with("* bajra  | "));
        assert_eq!(lines[1].matches('#').count(), 20);
        assert_eq!(lines[2].matches('#').count(), BAR_WIDTH);
        assert!(lines[2].ends_with("10.0"));
    }

    #[test]
    fn test_empty_comparison() {
        let cmp = YieldComparison {
            soil: "peat".to_string(),
            bars: vec![],
        };
        assert_eq!(format_comparison(&cmp), "No yield data for peat soil.\n");
    }
}
