//! Age profile of the active workforce.

use super::active_workforce;
use crate::{
    EmployeeRecord, Query, Result,
    aggregate::{age_distribution, age_stats},
    columns,
    registry::MetricCategory,
    traits::Metric,
};
use polars::prelude::*;

/// Mean, median and oldest age of active employees.
///
/// # Returns
/// One-row DataFrame with columns: `employees`, `with_age`, `mean_age`,
/// `median_age`, `max_age`
#[derive(Debug, Clone, Default)]
pub struct AgeStats;

impl Metric for AgeStats {
    fn name(&self) -> &str {
        "age_stats"
    }

    fn description(&self) -> &str {
        "Mean, median and maximum age of active employees"
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
            columns::AGE,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let cohort = active_workforce(records, query);
        let stats = age_stats(&cohort);
        Ok(df![
            "employees" => [cohort.len() as u32],
            "with_age" => [stats.count as u32],
            "mean_age" => [stats.mean],
            "median_age" => [stats.median],
            "max_age" => [stats.max]
        ]?)
    }
}

/// Active headcount per age and generation, for the age scatter chart.
///
/// # Returns
/// DataFrame with columns: `age`, `generation`, `count`, ascending by age
#[derive(Debug, Clone, Default)]
pub struct AgeDistribution;

impl Metric for AgeDistribution {
    fn name(&self) -> &str {
        "age_distribution"
    }

    fn description(&self) -> &str {
        "Active employees per age and generation"
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
            columns::AGE,
            columns::GENERATION,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let cohort = active_workforce(records, query);
        let rows = age_distribution(&cohort);

        let ages: Vec<u32> = rows.iter().map(|(age, _, _)| *age).collect();
        let generations: Vec<String> = rows.iter().map(|(_, g, _)| g.to_string()).collect();
        let counts: Vec<u32> = rows.iter().map(|(_, _, count)| *count as u32).collect();

        Ok(df![
            "age" => ages,
            "generation" => generations,
            "count" => counts
        ]?)
    }
}
