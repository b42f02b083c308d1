//! Attrition by resignation month.

use super::distinct_leavers;
use crate::{
    EmployeeRecord, Query, Result, aggregate::monthly_counts, columns, period::month_name,
    registry::MetricCategory, traits::Metric,
};
use polars::prelude::*;

/// Leavers per resignation month, in calendar order.
///
/// Only the months of the query's selection are reported; months without
/// leavers report zero. Leavers without a resignation date are not counted.
///
/// # Returns
/// DataFrame with columns: `month`, `attrition_count`
#[derive(Debug, Clone, Default)]
pub struct AttritionByMonth;

impl Metric for AttritionByMonth {
    fn name(&self) -> &str {
        "attrition_by_month"
    }

    fn description(&self) -> &str {
        "Distinct leavers per resignation month for the selected months"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Attrition
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::RESIGNATION_DATE,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let leavers = distinct_leavers(records, query.year);
        let counts = monthly_counts(&leavers, &query.months);

        let months: Vec<&str> = counts
            .iter()
            .filter_map(|(month, _)| month_name(*month))
            .collect();
        let attrition: Vec<u32> = counts.iter().map(|(_, count)| *count as u32).collect();

        Ok(df![
            "month" => months,
            "attrition_count" => attrition
        ]?)
    }
}
