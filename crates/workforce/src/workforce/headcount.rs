//! Active headcount by category.
//!
//! All three metrics share one cohort: active employees in a reported
//! position level (Associate or Manager & Up), deduplicated by name.

use super::active_workforce;
use crate::{
    EmployeeRecord, Query, Result,
    aggregate::{headcount_by_gender, headcount_by_generation, headcount_by_position},
    columns,
    registry::MetricCategory,
    traits::Metric,
};
use polars::prelude::*;

/// Active headcount per position level.
///
/// # Returns
/// DataFrame with columns: `position`, `headcount`
#[derive(Debug, Clone, Default)]
pub struct HeadcountByPosition;

impl Metric for HeadcountByPosition {
    fn name(&self) -> &str {
        "headcount_by_position"
    }

    fn description(&self) -> &str {
        "Active employees per position level, each person counted once"
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
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let cohort = active_workforce(records, query);
        Ok(headcount_by_position(&cohort).to_frame("position", "headcount")?)
    }
}

/// Active headcount per generation.
///
/// # Returns
/// DataFrame with columns: `generation`, `headcount`
#[derive(Debug, Clone, Default)]
pub struct HeadcountByGeneration;

impl Metric for HeadcountByGeneration {
    fn name(&self) -> &str {
        "headcount_by_generation"
    }

    fn description(&self) -> &str {
        "Active employees per generation, each person counted once"
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
            columns::GENERATION,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let cohort = active_workforce(records, query);
        Ok(headcount_by_generation(&cohort).to_frame("generation", "headcount")?)
    }
}

/// Active headcount per gender.
///
/// # Returns
/// DataFrame with columns: `gender`, `headcount`
#[derive(Debug, Clone, Default)]
pub struct HeadcountByGender;

impl Metric for HeadcountByGender {
    fn name(&self) -> &str {
        "headcount_by_gender"
    }

    fn description(&self) -> &str {
        "Active employees per gender, each person counted once"
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
            columns::GENDER,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let cohort = active_workforce(records, query);
        Ok(headcount_by_gender(&cohort).to_frame("gender", "headcount")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawRow, YearFilter, normalize};

    fn records() -> Vec<EmployeeRecord> {
        normalize(&[
            RawRow::named("Jane Doe")
                .gender("Female")
                .generation("Millennial")
                .position("Associate")
                .status("ACTIVE")
                .calendar_year("2023"),
            // Second snapshot of the same person
            RawRow::named("JANE DOE")
                .gender("Female")
                .generation("Millennial")
                .position("Associate")
                .status("ACTIVE")
                .calendar_year("2024"),
            RawRow::named("John Roe")
                .gender("Male")
                .generation("Gen X")
                .position("Manager & Up")
                .status("ACTIVE")
                .calendar_year("2023"),
            RawRow::named("Left Early")
                .gender("Male")
                .generation("Gen Z")
                .position("Associate")
                .status("LEAVER")
                .calendar_year("2023"),
            RawRow::named("Contractor")
                .gender("Female")
                .position("Consultant")
                .status("ACTIVE")
                .calendar_year("2023"),
        ])
    }

    #[test]
    fn test_headcount_by_position_all_years() {
        let records = records();
        let result = HeadcountByPosition
            .compute(&records, &Query::new(YearFilter::All))
            .unwrap();

        assert_eq!(result.shape(), (2, 2));
        let positions = result.column("position").unwrap().str().unwrap();
        assert_eq!(positions.get(0), Some("Associate"));
        assert_eq!(positions.get(1), Some("Manager & Up"));

        let headcount = result.column("headcount").unwrap().u32().unwrap();
        // Jane counted once across both snapshots
        assert_eq!(headcount.get(0), Some(1));
        assert_eq!(headcount.get(1), Some(1));
    }

    #[test]
    fn test_headcount_by_generation_single_year() {
        let records = records();
        let result = HeadcountByGeneration
            .compute(&records, &Query::new(YearFilter::Year(2024)))
            .unwrap();

        assert_eq!(result.height(), 4);
        let headcount = result.column("headcount").unwrap().u32().unwrap();
        assert_eq!(headcount.into_iter().flatten().sum::<u32>(), 1);
        // Millennial is last in display order
        assert_eq!(headcount.get(3), Some(1));
    }

    #[test]
    fn test_headcount_by_gender_empty_year() {
        let records = records();
        let result = HeadcountByGender
            .compute(&records, &Query::new(YearFilter::Year(2021)))
            .unwrap();

        assert_eq!(result.height(), 2);
        let headcount = result.column("headcount").unwrap().u32().unwrap();
        assert_eq!(headcount.into_iter().flatten().sum::<u32>(), 0);
    }

    #[test]
    fn test_headcount_metadata() {
        assert_eq!(HeadcountByPosition.name(), "headcount_by_position");
        assert_eq!(HeadcountByGeneration.category(), MetricCategory::Workforce);
        assert!(HeadcountByGender.required_columns().contains(&columns::GENDER));
    }
}
