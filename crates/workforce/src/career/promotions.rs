//! Promotion and transfer counts.

use super::active_by_year;
use crate::{
    EmployeeRecord, PositionLevel, Query, Result, YearFilter,
    aggregate::{count_by_year, promotion_rate, tenure_stats},
    columns,
    record::Category,
    registry::MetricCategory,
    traits::Metric,
};
use polars::prelude::*;

/// Promotions, average tenure and promotion rate of active employees.
///
/// # Returns
/// One-row DataFrame with columns: `active_employees`, `promotions`,
/// `promotion_rate`, `average_tenure`
#[derive(Debug, Clone, Default)]
pub struct PromotionSummary;

impl Metric for PromotionSummary {
    fn name(&self) -> &str {
        "promotion_summary"
    }

    fn description(&self) -> &str {
        "Promotions and transfers, average tenure and promotion rate of active employees"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Career
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::PROMOTION_OR_TRANSFER,
            columns::TENURE,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let cohort = active_by_year(records, query.year);
        let promotions = cohort
            .iter()
            .filter(|record| record.promotion_or_transfer)
            .count();

        Ok(df![
            "active_employees" => [cohort.len() as u32],
            "promotions" => [promotions as u32],
            "promotion_rate" => [promotion_rate(&cohort).value()],
            "average_tenure" => [tenure_stats(&cohort).mean]
        ]?)
    }
}

/// Promotions per year across the reporting window.
///
/// # Returns
/// DataFrame with columns: `year`, `promotions`, one row per window year
#[derive(Debug, Clone, Default)]
pub struct PromotionsByYear;

impl Metric for PromotionsByYear {
    fn name(&self) -> &str {
        "promotions_by_year"
    }

    fn description(&self) -> &str {
        "Promotions and transfers of active employees per calendar year"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Career
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::PROMOTION_OR_TRANSFER,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], _query: &Query) -> Result<DataFrame> {
        let promoted: Vec<&EmployeeRecord> = active_by_year(records, YearFilter::All)
            .into_iter()
            .filter(|record| record.promotion_or_transfer)
            .collect();
        let counts = count_by_year(&promoted, |record| record.calendar_year);

        Ok(df![
            "year" => counts.iter().map(|c| c.year).collect::<Vec<_>>(),
            "promotions" => counts.iter().map(|c| c.count as u32).collect::<Vec<_>>()
        ]?)
    }
}

/// Promotions per year and reported position level, zero-filled.
///
/// # Returns
/// DataFrame with columns: `year`, `position`, `promotions`
#[derive(Debug, Clone, Default)]
pub struct PromotionsByPosition;

impl Metric for PromotionsByPosition {
    fn name(&self) -> &str {
        "promotions_by_position"
    }

    fn description(&self) -> &str {
        "Promotions and transfers per year and position level"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Career
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::PROMOTION_OR_TRANSFER,
            columns::POSITION_LEVEL,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let promoted: Vec<&EmployeeRecord> = active_by_year(records, query.year)
            .into_iter()
            .filter(|record| record.promotion_or_transfer)
            .collect();

        let mut years = Vec::new();
        let mut positions = Vec::new();
        let mut promotions = Vec::new();
        for year in query.year.years() {
            for &position in PositionLevel::DISPLAY_ORDER {
                let count = promoted
                    .iter()
                    .filter(|record| {
                        record.calendar_year == Some(year) && record.position_level == position
                    })
                    .count();
                years.push(year);
                positions.push(position.to_string());
                promotions.push(count as u32);
            }
        }

        Ok(df![
            "year" => years,
            "position" => positions,
            "promotions" => promotions
        ]?)
    }
}
