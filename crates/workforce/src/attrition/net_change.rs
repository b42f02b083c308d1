//! Net talent change: joins against resignations.

use super::distinct_leavers;
use crate::{
    EmployeeRecord, Query, Result, aggregate::talent_flow, columns, registry::MetricCategory,
    traits::Metric,
};
use polars::prelude::*;

/// Net gain or loss of people per year.
///
/// Joins count each person once in their year joined; resignations count
/// each leaver once per calendar year. `status` is "Increase" for a positive
/// net change and "Decrease" otherwise.
///
/// # Returns
/// DataFrame with columns: `year`, `joins`, `resignations`, `net_change`,
/// `status`
#[derive(Debug, Clone, Default)]
pub struct NetTalentChange;

impl Metric for NetTalentChange {
    fn name(&self) -> &str {
        "net_talent_change"
    }

    fn description(&self) -> &str {
        "Joins minus resignations per year"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Attrition
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::YEAR_JOINED,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let joiners: Vec<&EmployeeRecord> = records.iter().collect();
        let leavers = distinct_leavers(records, query.year);
        let flow = talent_flow(&joiners, &leavers, &query.year.years());

        Ok(df![
            "year" => flow.iter().map(|row| row.year).collect::<Vec<_>>(),
            "joins" => flow.iter().map(|row| row.joins as u32).collect::<Vec<_>>(),
            "resignations" => flow.iter().map(|row| row.resignations as u32).collect::<Vec<_>>(),
            "net_change" => flow.iter().map(|row| row.net_change).collect::<Vec<_>>(),
            "status" => flow
                .iter()
                .map(|row| if row.net_change > 0 { "Increase" } else { "Decrease" })
                .collect::<Vec<_>>()
        ]?)
    }
}
