//! advisory-core: reference tables and the crop recommendation resolver

pub mod comparison;
pub mod explanation;
pub mod income;
pub mod options;
pub mod recommendation;
pub mod report;
pub mod resolver;
pub mod tables;
pub mod yields;

pub use comparison::{compare_yields, YieldBar, YieldComparison};
pub use explanation::{explain, title_case};
pub use income::{estimate_income, IncomeEstimate, QUINTAL_PRICE_UNIT};
pub use recommendation::{Recommendation, NOT_AVAILABLE};
pub use report::{AdvisoryReport, DEFAULT_REPORT_TITLE};
pub use resolver::{find_rule, resolve, AdvisoryRequest, MatchTier, Resolution, RESILIENT_CROPS};
pub use tables::{CropRule, FertilizerRow, PriceRow, ReferenceTables, TableSource, YieldRow};
pub use yields::{average_yield, parse_yield_range, YieldParseError, YieldRange};
