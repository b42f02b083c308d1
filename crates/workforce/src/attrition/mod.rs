//! Attrition metrics - who leaves, when, and who stays
//!
//! Attrition metrics count leavers once per calendar year and measure
//! retention against everyone observed in the same year.

pub mod exit_type;
pub mod monthly;
pub mod net_change;
pub mod retention;
pub mod summary;
pub mod trend;

pub use exit_type::AttritionByExitType;
pub use monthly::AttritionByMonth;
pub use net_change::NetTalentChange;
pub use retention::{RetentionByGender, RetentionByGeneration};
pub use summary::{Summary, WorkforceSummary, summarize};
pub use trend::ResignationTrend;

use crate::cohort::{Dedup, everyone, is_leaver, select_cohort};
use crate::{EmployeeRecord, YearFilter};

/// Distinct leavers per (name, calendar year).
pub(crate) fn distinct_leavers(
    records: &[EmployeeRecord],
    year: YearFilter,
) -> Vec<&EmployeeRecord> {
    select_cohort(records, year, Dedup::ByIdentityAndYear, is_leaver)
}

/// Everyone observed, once per (name, calendar year).
pub(crate) fn yearly_population(
    records: &[EmployeeRecord],
    year: YearFilter,
) -> Vec<&EmployeeRecord> {
    select_cohort(records, year, Dedup::ByIdentityAndYear, everyone)
}
