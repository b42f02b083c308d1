//! Workforce metrics - who is on the payroll
//!
//! Workforce metrics describe the active workforce: headcount split by
//! position, generation and gender, plus tenure and age profiles. Every
//! metric here counts each person once, however many snapshot rows they have.

pub mod age;
pub mod headcount;
pub mod tenure;

pub use age::{AgeDistribution, AgeStats};
pub use headcount::{HeadcountByGender, HeadcountByGeneration, HeadcountByPosition};
pub use tenure::TenureStats;

use crate::cohort::{Dedup, is_reported_active, select_cohort};
use crate::{EmployeeRecord, Query};

/// Active employees in a reported position level, one record per name.
pub(crate) fn active_workforce<'a>(
    records: &'a [EmployeeRecord],
    query: &Query,
) -> Vec<&'a EmployeeRecord> {
    select_cohort(records, query.year, Dedup::ByIdentity, is_reported_active)
}
