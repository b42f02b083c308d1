//! Retention split by gender and by generation.
//!
//! Both metrics count each person once per calendar year and report only
//! the groups observed in each year.

use super::yearly_population;
use crate::{
    EmployeeRecord, Query, Result,
    aggregate::{retention_by_group, retention_by_year},
    columns,
    registry::MetricCategory,
    traits::Metric,
};
use polars::prelude::*;
use std::collections::HashMap;

/// Retained employees per year and gender, with the overall yearly rate.
///
/// # Returns
/// DataFrame with columns: `year`, `gender`, `retained`, `total`,
/// `retention_rate`, `year_retention_rate`
#[derive(Debug, Clone, Default)]
pub struct RetentionByGender;

impl Metric for RetentionByGender {
    fn name(&self) -> &str {
        "retention_by_gender"
    }

    fn description(&self) -> &str {
        "Retained employees per year and gender, with the retention rate of each year"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Attrition
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::GENDER,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let population = yearly_population(records, query.year);
        let rows = retention_by_group(&population, |record| record.gender);
        let yearly: HashMap<i32, f64> = retention_by_year(&population)
            .into_iter()
            .map(|(year, summary)| (year, summary.retention_rate.value()))
            .collect();

        Ok(df![
            "year" => rows.iter().map(|row| row.year).collect::<Vec<_>>(),
            "gender" => rows.iter().map(|row| row.group.to_string()).collect::<Vec<_>>(),
            "retained" => rows.iter().map(|row| row.summary.retained as u32).collect::<Vec<_>>(),
            "total" => rows.iter().map(|row| row.summary.total as u32).collect::<Vec<_>>(),
            "retention_rate" => rows
                .iter()
                .map(|row| row.summary.retention_rate.value())
                .collect::<Vec<_>>(),
            "year_retention_rate" => rows
                .iter()
                .map(|row| yearly.get(&row.year).copied().unwrap_or_default())
                .collect::<Vec<_>>()
        ]?)
    }
}

/// Active share per year and generation.
///
/// # Returns
/// DataFrame with columns: `year`, `generation`, `total`, `active`,
/// `retention_rate`
#[derive(Debug, Clone, Default)]
pub struct RetentionByGeneration;

impl Metric for RetentionByGeneration {
    fn name(&self) -> &str {
        "retention_by_generation"
    }

    fn description(&self) -> &str {
        "Active employees as a share of everyone observed, per year and generation"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Attrition
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::GENERATION,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let population = yearly_population(records, query.year);
        let rows = retention_by_group(&population, |record| record.generation);

        Ok(df![
            "year" => rows.iter().map(|row| row.year).collect::<Vec<_>>(),
            "generation" => rows.iter().map(|row| row.group.to_string()).collect::<Vec<_>>(),
            "total" => rows.iter().map(|row| row.summary.total as u32).collect::<Vec<_>>(),
            "active" => rows.iter().map(|row| row.summary.retained as u32).collect::<Vec<_>>(),
            "retention_rate" => rows
                .iter()
                .map(|row| row.summary.retention_rate.value())
                .collect::<Vec<_>>()
        ]?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawRow, YearFilter, normalize};
    use approx::assert_relative_eq;

    fn records() -> Vec<EmployeeRecord> {
        normalize(&[
            RawRow::named("A").gender("F").generation("Gen Z").status("ACTIVE").calendar_year("2022"),
            RawRow::named("B").gender("F").generation("Gen Z").status("LEAVER").calendar_year("2022"),
            RawRow::named("C").gender("M").generation("Millennial").status("ACTIVE").calendar_year("2022"),
            RawRow::named("C").gender("M").generation("Millennial").status("ACTIVE").calendar_year("2023"),
            RawRow::named("D").gender("M").generation("Gen X").status("LEAVER").calendar_year("2019"),
        ])
    }

    #[test]
    fn test_retention_by_gender() {
        let records = records();
        let result = RetentionByGender
            .compute(&records, &Query::new(YearFilter::All))
            .unwrap();

        // 2022 Female, 2022 Male, 2023 Male; 2019 is outside the window
        assert_eq!(result.shape(), (3, 6));

        let gender = result.column("gender").unwrap().str().unwrap();
        assert_eq!(gender.get(0), Some("Female"));
        assert_eq!(gender.get(1), Some("Male"));

        let retained = result.column("retained").unwrap().u32().unwrap();
        assert_eq!(retained.get(0), Some(1));

        let rate = result.column("retention_rate").unwrap().f64().unwrap();
        assert_relative_eq!(rate.get(0).unwrap(), 50.0);

        let year_rate = result.column("year_retention_rate").unwrap().f64().unwrap();
        assert_relative_eq!(year_rate.get(0).unwrap(), 200.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(year_rate.get(2).unwrap(), 100.0);
    }

    #[test]
    fn test_retention_by_generation_single_year() {
        let records = records();
        let result = RetentionByGeneration
            .compute(&records, &Query::new(YearFilter::Year(2022)))
            .unwrap();

        assert_eq!(result.height(), 2);
        let generation = result.column("generation").unwrap().str().unwrap();
        assert_eq!(generation.get(0), Some("Gen Z"));
        assert_eq!(generation.get(1), Some("Millennial"));

        let active = result.column("active").unwrap().u32().unwrap();
        let total = result.column("total").unwrap().u32().unwrap();
        assert_eq!((active.get(0), total.get(0)), (Some(1), Some(2)));
    }

    #[test]
    fn test_retention_empty() {
        let result = RetentionByGeneration
            .compute(&[], &Query::default())
            .unwrap();
        assert_eq!(result.height(), 0);
    }
}
