//! Voluntary versus involuntary attrition.

use super::distinct_leavers;
use crate::{
    EmployeeRecord, Query, Result, aggregate::exit_type_counts, columns,
    registry::MetricCategory, traits::Metric,
};
use polars::prelude::*;

/// Distinct leavers per exit type.
///
/// Leavers without a recognized exit type are left out.
///
/// # Returns
/// DataFrame with columns: `exit_type`, `leavers`
#[derive(Debug, Clone, Default)]
pub struct AttritionByExitType;

impl Metric for AttritionByExitType {
    fn name(&self) -> &str {
        "attrition_by_exit_type"
    }

    fn description(&self) -> &str {
        "Distinct leavers split into voluntary and involuntary exits"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Attrition
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::ATTRITION_TYPE,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let leavers = distinct_leavers(records, query.year);
        Ok(exit_type_counts(&leavers).to_frame("exit_type", "leavers")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawRow, YearFilter, normalize};

    #[test]
    fn test_attrition_by_exit_type() {
        let records = normalize(&[
            RawRow::named("A").status("LEAVER").calendar_year("2024").exit_type("Voluntary"),
            RawRow::named("B").status("LEAVER").calendar_year("2024").exit_type("voluntary"),
            RawRow::named("C").status("LEAVER").calendar_year("2024").exit_type("Involuntary"),
            RawRow::named("D").status("LEAVER").calendar_year("2024"),
            RawRow::named("E").status("ACTIVE").calendar_year("2024").exit_type("Voluntary"),
        ]);

        let result = AttritionByExitType
            .compute(&records, &Query::new(YearFilter::Year(2024)))
            .unwrap();

        assert_eq!(result.shape(), (2, 2));
        let exit_type = result.column("exit_type").unwrap().str().unwrap();
        assert_eq!(exit_type.get(0), Some("Voluntary"));
        assert_eq!(exit_type.get(1), Some("Involuntary"));

        let leavers = result.column("leavers").unwrap().u32().unwrap();
        assert_eq!(leavers.get(0), Some(2));
        assert_eq!(leavers.get(1), Some(1));
    }
}
