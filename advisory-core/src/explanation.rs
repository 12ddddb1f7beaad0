//! Human-readable reasoning attached to every recommendation.

const RABI_CLAUSE: &str = "the temperature is suitable for Rabi season";
const KHARIF_CLAUSE: &str = "the crop fits well in Kharif season";
const LOW_RAIN_CLAUSE: &str = "it performs well in low rainfall";
const HIGH_RAIN_CLAUSE: &str = "it benefits from high rainfall";

/// Soils whose nutrient retention is called out
const RETENTIVE_SOILS: [&str; 2] = ["black", "loamy"];

/// "pigeon pea" -> "Pigeon Pea": first letter of every alphabetic run upper, rest lower.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Reasons in fixed order: season, rainfall, soil.
///
/// The season reason is always present (anything but rabi reads as kharif);
/// rainfall only for low/high; soil only for the retentive soils.
pub fn reasons(soil: &str, season: &str, rainfall: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(3);

    if season == "rabi" {
        out.push(RABI_CLAUSE.to_string());
    } else {
        out.push(KHARIF_CLAUSE.to_string());
    }

    match rainfall {
        "low" => out.push(LOW_RAIN_CLAUSE.to_string()),
        "high" => out.push(HIGH_RAIN_CLAUSE.to_string()),
        _ => {}
    }

    if RETENTIVE_SOILS.contains(&soil) {
        out.push(format!("{} soil retains nutrients well", soil));
    }

    out
}

/// Inputs are expected already normalized (trimmed, lowercase).
pub fn explain(soil: &str, season: &str, rainfall: &str, crop: &str) -> String {
    format!(
        "{} is recommended because {}.",
        title_case(crop),
        reasons(soil, season, rainfall).join(", and ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bajra"), "Bajra");
        assert_eq!(title_case("pigeon pea"), "Pigeon Pea");
        assert_eq!(title_case("WHEAT"), "Wheat");
        assert_eq!(title_case("black-gram"), "Black-Gram");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_all_three_clauses_in_order() {
        let text = explain("black", "kharif", "low", "bajra");
        assert_eq!(
            text,
            "Bajra is recommended because the crop fits well in Kharif season, \
             and it performs well in low rainfall, and black soil retains nutrients well."
        );
    }

    #[test]
    fn test_season_only() {
        let text = explain("alluvial", "rabi", "medium", "wheat");
        assert_eq!(
            text,
            "Wheat is recommended because the temperature is suitable for Rabi season."
        );
    }

    #[test]
    fn test_rainfall_clause_omitted_soil_kept() {
        let text = explain("loamy", "zaid", "medium", "vegetables");
        assert_eq!(
            text,
            "Vegetables is recommended because the crop fits well in Kharif season, \
             and loamy soil retains nutrients well."
        );
    }

    #[test]
    fn test_high_rainfall() {
        let r = reasons("clay", "kharif", "high");
        assert_eq!(r, vec![KHARIF_CLAUSE.to_string(), HIGH_RAIN_CLAUSE.to_string()]);
    }

    #[test]
    fn test_crop_title_cased_once() {
        let text = explain("black", "rabi", "low", "pulses");
        assert!(text.starts_with("Pulses is recommended"));
        assert_eq!(text.matches("Pulses").count(), 1);
    }
}
