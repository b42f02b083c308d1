//! Retention, attrition and promotion rates.

use crate::record::{Category, EmployeeRecord};
use derive_more::Display;
use serde::Serialize;
use std::collections::BTreeMap;

/// A percentage kept at full precision.
///
/// Formatting rounds to one decimal place.
#[derive(Debug, Display, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[display("{_0:.1}%")]
pub struct Percentage(f64);

impl Percentage {
    /// `part / whole * 100`, or zero when `whole` is zero.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            Self(0.0)
        } else {
            Self(part as f64 / whole as f64 * 100.0)
        }
    }

    /// Full-precision value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Value rounded to one decimal place.
    pub fn rounded(self) -> f64 {
        (self.0 * 10.0).round() / 10.0
    }
}

/// Retained and resigned counts of a cohort.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RetentionSummary {
    /// Records in the cohort
    pub total: usize,
    /// Records with the retained flag
    pub retained: usize,
    /// Records with the resigned flag
    pub resigned: usize,
    /// `retained / total`
    pub retention_rate: Percentage,
    /// `resigned / total`
    pub attrition_rate: Percentage,
}

/// Retention and attrition of a cohort.
///
/// The two rates sum to 100 for any non-empty cohort and are both zero for
/// an empty one.
pub fn retention(cohort: &[&EmployeeRecord]) -> RetentionSummary {
    let total = cohort.len();
    let resigned = cohort.iter().filter(|record| record.resigned_flag()).count();
    let retained = total - resigned;
    RetentionSummary {
        total,
        retained,
        resigned,
        retention_rate: Percentage::of(retained, total),
        attrition_rate: Percentage::of(resigned, total),
    }
}

/// Share of the cohort promoted or transferred.
pub fn promotion_rate(cohort: &[&EmployeeRecord]) -> Percentage {
    let promoted = cohort
        .iter()
        .filter(|record| record.promotion_or_transfer)
        .count();
    Percentage::of(promoted, cohort.len())
}

/// Retention per calendar year, ascending. Undated records are skipped.
pub fn retention_by_year(cohort: &[&EmployeeRecord]) -> Vec<(i32, RetentionSummary)> {
    group_by_year(cohort)
        .into_iter()
        .map(|(year, members)| (year, retention(&members)))
        .collect()
}

/// Retention of one group in one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupRetention<K> {
    /// Calendar year
    pub year: i32,
    /// Group key
    pub group: K,
    /// Counts and rates of the group
    pub summary: RetentionSummary,
}

/// Retention per (year, group) for groups present in the cohort.
///
/// Rows are ordered by year, then by the group's display order.
pub fn retention_by_group<K, F>(cohort: &[&EmployeeRecord], key: F) -> Vec<GroupRetention<K>>
where
    K: Category,
    F: Fn(&EmployeeRecord) -> K,
{
    let mut rows = Vec::new();
    for (year, members) in group_by_year(cohort) {
        let mut groups: Vec<(K, Vec<&EmployeeRecord>)> = Vec::new();
        for record in members {
            let group = key(record);
            match groups.iter_mut().find(|(k, _)| *k == group) {
                Some((_, records)) => records.push(record),
                None => groups.push((group, vec![record])),
            }
        }
        groups.sort_by_key(|(group, _)| display_rank(*group));
        rows.extend(groups.into_iter().map(|(group, records)| GroupRetention {
            year,
            group,
            summary: retention(&records),
        }));
    }
    rows
}

fn group_by_year<'a>(cohort: &[&'a EmployeeRecord]) -> BTreeMap<i32, Vec<&'a EmployeeRecord>> {
    let mut by_year: BTreeMap<i32, Vec<&'a EmployeeRecord>> = BTreeMap::new();
    for &record in cohort {
        if let Some(year) = record.calendar_year {
            by_year.entry(year).or_default().push(record);
        }
    }
    by_year
}

fn display_rank<K: Category>(key: K) -> usize {
    K::DISPLAY_ORDER
        .iter()
        .position(|&k| k == key)
        .unwrap_or(K::DISPLAY_ORDER.len())
}
