//! Tenure profile of the active workforce.

use super::active_workforce;
use crate::{
    EmployeeRecord, Query, Result, aggregate::tenure_stats, columns, registry::MetricCategory,
    traits::Metric,
};
use polars::prelude::*;

/// Mean, median and longest tenure of active employees.
///
/// Employees without a parseable tenure count toward `employees` but not
/// toward the statistics.
///
/// # Required Columns
/// - `Full Name`, `Resignee Checking`, `Calendar Year`, `Position/Level`
/// - `Tenure`: years with the organization
///
/// # Returns
/// One-row DataFrame with columns: `employees`, `with_tenure`,
/// `mean_tenure`, `median_tenure`, `max_tenure`
#[derive(Debug, Clone, Default)]
pub struct TenureStats;

impl Metric for TenureStats {
    fn name(&self) -> &str {
        "tenure_stats"
    }

    fn description(&self) -> &str {
        "Mean, median and maximum tenure in years of active employees"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Workforce
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::POSITION_LEVEL,
            columns::TENURE,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let cohort = active_workforce(records, query);
        let stats = tenure_stats(&cohort);
        Ok(df![
            "employees" => [cohort.len() as u32],
            "with_tenure" => [stats.count as u32],
            "mean_tenure" => [stats.mean],
            "median_tenure" => [stats.median],
            "max_tenure" => [stats.max]
        ]?)
    }
}
