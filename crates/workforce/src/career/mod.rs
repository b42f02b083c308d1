//! Career metrics - promotions and transfers
//!
//! Career metrics look at active employees, once per calendar year, and the
//! share of them promoted or transferred in the snapshot.

pub mod histogram;
pub mod promotions;

pub use histogram::{HistogramConfig, PromotedTenureHistogram};
pub use promotions::{PromotionSummary, PromotionsByPosition, PromotionsByYear};

use crate::cohort::{Dedup, is_active, select_cohort};
use crate::{EmployeeRecord, YearFilter};

/// Active employees, once per (name, calendar year).
pub(crate) fn active_by_year(
    records: &[EmployeeRecord],
    year: YearFilter,
) -> Vec<&EmployeeRecord> {
    select_cohort(records, year, Dedup::ByIdentityAndYear, is_active)
}
