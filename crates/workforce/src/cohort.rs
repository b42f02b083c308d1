//! Cohort selection and deduplication.
//!
//! A cohort is the subset of records relevant to one question, such as
//! "active employees in 2023" or "distinct leavers across the window".
//! Selection filters by year, then by predicate, then deduplicates.

use crate::period::YearFilter;
use crate::record::{EmployeeRecord, Status};
use std::collections::HashSet;

/// How repeated observations of one person are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dedup {
    /// Keep every matching record
    #[default]
    None,
    /// One record per name, first occurrence wins.
    ///
    /// Used for headcount-style questions.
    ByIdentity,
    /// One record per (name, calendar year), first occurrence wins.
    ///
    /// Used for event-style questions where a person can count once in
    /// each year.
    ByIdentityAndYear,
}

/// Select the records matching `year` and `predicate`, deduplicated by `dedup`.
///
/// Records whose name is empty carry no identity and are dropped by both
/// deduplicating modes. An empty result is a valid cohort.
pub fn select_cohort<'a, P>(
    records: &'a [EmployeeRecord],
    year: YearFilter,
    dedup: Dedup,
    predicate: P,
) -> Vec<&'a EmployeeRecord>
where
    P: Fn(&EmployeeRecord) -> bool,
{
    let mut seen: HashSet<(&'a str, Option<i32>)> = HashSet::new();
    records
        .iter()
        .filter(|record| year.contains(record.calendar_year))
        .filter(|&record| predicate(record))
        .filter(|&record| match dedup {
            Dedup::None => true,
            Dedup::ByIdentity => {
                !record.full_name.is_empty() && seen.insert((record.full_name.as_str(), None))
            }
            Dedup::ByIdentityAndYear => {
                !record.full_name.is_empty()
                    && seen.insert((record.full_name.as_str(), record.calendar_year))
            }
        })
        .collect()
}

/// Matches every record.
pub const fn everyone(_: &EmployeeRecord) -> bool {
    true
}

/// Active employees.
pub const fn is_active(record: &EmployeeRecord) -> bool {
    matches!(record.status, Status::Active)
}

/// Leavers, under the any-non-active status policy.
pub const fn is_leaver(record: &EmployeeRecord) -> bool {
    record.resigned_flag()
}

/// Employees in a reported position level (Associate or Manager & Up).
pub const fn in_reported_position(record: &EmployeeRecord) -> bool {
    record.position_level.is_reported()
}

/// Employees promoted or transferred in the snapshot.
pub const fn is_promoted(record: &EmployeeRecord) -> bool {
    record.promotion_or_transfer
}

/// Active employees in a reported position level.
pub const fn is_reported_active(record: &EmployeeRecord) -> bool {
    is_active(record) && in_reported_position(record)
}
