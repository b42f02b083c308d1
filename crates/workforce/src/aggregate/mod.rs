//! Metrics aggregation over cohorts.
//!
//! Every function here is pure: it reads a cohort (`&[&EmployeeRecord]`)
//! and returns a small result structure. Empty cohorts produce zero counts,
//! zero rates and empty statistics, never an error.
//!
//! [`EmployeeRecord`]: crate::EmployeeRecord

pub mod counts;
pub mod rates;
pub mod series;
pub mod stats;

pub use counts::{
    CategoryCounts, age_distribution, exit_type_counts, headcount_by_gender,
    headcount_by_generation, headcount_by_position,
};
pub use rates::{
    GroupRetention, Percentage, RetentionSummary, promotion_rate, retention, retention_by_group,
    retention_by_year,
};
pub use series::{
    ResignationTrend, TalentFlow, YearBucket, YearCount, count_by_year, monthly_counts,
    resignation_trend, talent_flow,
};
pub use stats::{HistogramBin, SummaryStats, age_stats, histogram, tenure_stats};
