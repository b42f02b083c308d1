//! Headline numbers of the attrition page.

use super::{distinct_leavers, yearly_population};
use crate::{
    EmployeeRecord, Query, Result,
    aggregate::{Percentage, retention, talent_flow},
    cohort::{Dedup, is_active, select_cohort},
    columns,
    registry::MetricCategory,
    traits::Metric,
};
use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Headline workforce numbers for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected year, or "All"
    pub year: String,
    /// Distinct active employees
    pub active_employees: usize,
    /// Distinct leavers, once per calendar year
    pub leavers: usize,
    /// Distinct joiners by year joined
    pub joins: usize,
    /// Share of the yearly population still active
    pub retention_rate: Percentage,
    /// Share of the yearly population that left
    pub attrition_rate: Percentage,
    /// `joins - leavers`
    pub net_change: i64,
}

/// Compute the headline numbers.
///
/// Joins are zero when the records carry no year joined.
pub fn summarize(records: &[EmployeeRecord], query: &Query) -> Summary {
    let active = select_cohort(records, query.year, Dedup::ByIdentity, is_active);
    let leavers = distinct_leavers(records, query.year);
    let population = yearly_population(records, query.year);
    let rates = retention(&population);

    // Joiners are keyed by year joined, not by snapshot year
    let joiners: Vec<&EmployeeRecord> = records.iter().collect();
    let flow = talent_flow(&joiners, &leavers, &query.year.years());
    let joins = flow.iter().map(|year| year.joins).sum();
    let net_change = flow.iter().map(|year| year.net_change).sum();

    debug!(
        year = %query.year,
        active = active.len(),
        leavers = leavers.len(),
        "summarized workforce"
    );

    Summary {
        year: query.year.to_string(),
        active_employees: active.len(),
        leavers: leavers.len(),
        joins,
        retention_rate: rates.retention_rate,
        attrition_rate: rates.attrition_rate,
        net_change,
    }
}

/// Workforce summary metric.
///
/// # Returns
/// One-row DataFrame with columns: `year`, `active_employees`, `leavers`,
/// `joins`, `retention_rate`, `attrition_rate`, `net_change`
#[derive(Debug, Clone, Default)]
pub struct WorkforceSummary;

impl Metric for WorkforceSummary {
    fn name(&self) -> &str {
        "workforce_summary"
    }

    fn description(&self) -> &str {
        "Active employees, distinct leavers, retention and attrition rates, net change"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Attrition
    }

    fn required_columns(&self) -> &[&str] {
        &[columns::FULL_NAME, columns::STATUS, columns::CALENDAR_YEAR]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let summary = summarize(records, query);
        Ok(df![
            "year" => [summary.year],
            "active_employees" => [summary.active_employees as u32],
            "leavers" => [summary.leavers as u32],
            "joins" => [summary.joins as u32],
            "retention_rate" => [summary.retention_rate.value()],
            "attrition_rate" => [summary.attrition_rate.value()],
            "net_change" => [summary.net_change]
        ]?)
    }
}
