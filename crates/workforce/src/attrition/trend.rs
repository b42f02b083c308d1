//! Resignations per year.

use super::distinct_leavers;
use crate::{
    EmployeeRecord, Query, Result, YearFilter, aggregate::resignation_trend, columns,
    registry::MetricCategory, traits::Metric,
};
use polars::prelude::*;

/// Six-year resignation series.
///
/// The series always spans the full reporting window so the chart keeps its
/// axis; `selected` marks the years inside the query's year filter. A month
/// selection restricts the count to leavers who resigned in those months.
///
/// # Returns
/// DataFrame with columns: `year`, `resigned`, `selected`
#[derive(Debug, Clone, Default)]
pub struct ResignationTrend;

impl Metric for ResignationTrend {
    fn name(&self) -> &str {
        "resignation_trend"
    }

    fn description(&self) -> &str {
        "Distinct leavers per calendar year across the reporting window"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Attrition
    }

    fn required_columns(&self) -> &[&str] {
        &[columns::FULL_NAME, columns::STATUS, columns::CALENDAR_YEAR]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let leavers = distinct_leavers(records, YearFilter::All);
        let trend = resignation_trend(&leavers, &query.months);

        let years: Vec<i32> = trend.years.iter().map(|bucket| bucket.year).collect();
        let resigned: Vec<u32> = trend.years.iter().map(|bucket| bucket.total as u32).collect();
        let selected: Vec<bool> = years
            .iter()
            .map(|&year| query.year.contains(Some(year)))
            .collect();

        Ok(df![
            "year" => years,
            "resigned" => resigned,
            "selected" => selected
        ]?)
    }
}
