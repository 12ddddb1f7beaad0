//! Choices offered by the advisory input form.
//!
//! Resolution still accepts any value; these lists only drive prompts and
//! warnings in front-ends.

pub const SOILS: [&str; 7] = ["alluvial", "black", "red", "laterite", "sandy", "loamy", "clay"];
pub const SEASONS: [&str; 3] = ["kharif", "rabi", "zaid"];
pub const RAINFALL_LEVELS: [&str; 3] = ["low", "medium", "high"];

fn is_known(options: &[&str], value: &str) -> bool {
    let v = value.trim().to_lowercase();
    options.iter().any(|o| *o == v)
}

pub fn is_known_soil(value: &str) -> bool {
    is_known(&SOILS, value)
}

pub fn is_known_season(value: &str) -> bool {
    is_known(&SEASONS, value)
}

pub fn is_known_rainfall(value: &str) -> bool {
    is_known(&RAINFALL_LEVELS, value)
}
