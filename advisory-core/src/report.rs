//! One-page advisory document.

use crate::recommendation::Recommendation;

pub const DEFAULT_REPORT_TITLE: &str = "Offline Crop Advisory System";

#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryReport<'a> {
    pub title: String,
    pub recommendation: &'a Recommendation,
}

impl<'a> AdvisoryReport<'a> {
    pub fn new(title: impl Into<String>, recommendation: &'a Recommendation) -> Self {
        Self {
            title: title.into(),
            recommendation,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let r = self.recommendation;
        vec![
            self.title.clone(),
            format!("Recommended Crop: {}", r.crop),
            format!("Fertilizer: {}", r.fertilizer),
            format!("Quantity: {}", r.quantity),
            format!("Expected Yield: {}", r.expected_yield),
            format!("Estimated Income: {}", r.income),
            String::new(),
            "Why this crop?".to_string(),
            r.explanation.clone(),
        ]
    }

    pub fn render(&self) -> String {
        let mut out = self.lines().join("\n");
        out.push('\n');
        out
    }
}
