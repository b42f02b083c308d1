//! Time-bucketed counts.
//!
//! Year series are left-joined against [`REPORTING_YEARS`]: every year of the
//! window appears, with a zero count when the data has nothing for it.

use crate::period::{MonthSelection, REPORTING_YEARS};
use crate::record::EmployeeRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Count for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    /// Calendar year
    pub year: i32,
    /// Records counted for the year
    pub count: usize,
}

/// Count records per year of `key`, over the whole reporting window.
pub fn count_by_year<F>(cohort: &[&EmployeeRecord], key: F) -> Vec<YearCount>
where
    F: Fn(&EmployeeRecord) -> Option<i32>,
{
    let mut counts: Vec<YearCount> = REPORTING_YEARS
        .map(|year| YearCount { year, count: 0 })
        .collect();
    for &record in cohort {
        if let Some(bucket) = key(record).and_then(window_index) {
            counts[bucket].count += 1;
        }
    }
    counts
}

/// Resignations in one year, split by resignation month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearBucket {
    /// Calendar year
    pub year: i32,
    /// Resignations counted for the year
    pub total: usize,
    /// Resignations per month, January first
    pub months: [usize; 12],
}

/// Six-year resignation series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResignationTrend {
    /// One bucket per year of the reporting window, ascending
    pub years: Vec<YearBucket>,
}

impl ResignationTrend {
    /// Resignations over the whole window.
    pub fn total(&self) -> usize {
        self.years.iter().map(|bucket| bucket.total).sum()
    }

    /// Bucket for a year, if inside the window.
    pub fn get(&self, year: i32) -> Option<&YearBucket> {
        self.years.iter().find(|bucket| bucket.year == year)
    }
}

/// Bucket a leaver cohort by calendar year and resignation month.
///
/// The cohort is expected to hold leavers already; every record is counted
/// as one resignation in its calendar year. With a month selection only
/// records resigning in a selected month count; without one, records with
/// no resignation date still count toward the year total.
pub fn resignation_trend(cohort: &[&EmployeeRecord], months: &MonthSelection) -> ResignationTrend {
    let mut years: Vec<YearBucket> = REPORTING_YEARS
        .map(|year| YearBucket {
            year,
            total: 0,
            months: [0; 12],
        })
        .collect();
    for record in cohort {
        let Some(index) = record.calendar_year.and_then(window_index) else {
            continue;
        };
        let month = record.resignation_month();
        if !months.contains(month) {
            continue;
        }
        let bucket = &mut years[index];
        bucket.total += 1;
        if let Some(month) = month {
            bucket.months[month as usize - 1] += 1;
        }
    }
    ResignationTrend { years }
}

/// Count records per resignation month, for the selected months in
/// calendar order. Months with no records report zero; selected values
/// outside 1-12 are skipped.
pub fn monthly_counts(cohort: &[&EmployeeRecord], months: &MonthSelection) -> Vec<(u32, usize)> {
    let mut counts = [0usize; 12];
    for record in cohort {
        if let Some(month) = record.resignation_month() {
            counts[month as usize - 1] += 1;
        }
    }
    months
        .months()
        .into_iter()
        .filter_map(|month| {
            let count = month.checked_sub(1).and_then(|i| counts.get(i as usize))?;
            Some((month, *count))
        })
        .collect()
}

/// Joins and resignations in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TalentFlow {
    /// Calendar year
    pub year: i32,
    /// Distinct people who joined in the year
    pub joins: usize,
    /// Distinct people who resigned in the year
    pub resignations: usize,
    /// `joins - resignations`
    pub net_change: i64,
}

/// Net talent gain or loss per year.
///
/// `joiners` is counted once per name by year joined, `leavers` once per
/// name by calendar year. Records with an empty name are not counted.
pub fn talent_flow(
    joiners: &[&EmployeeRecord],
    leavers: &[&EmployeeRecord],
    years: &[i32],
) -> Vec<TalentFlow> {
    let joined: HashSet<(&str, i32)> = joiners
        .iter()
        .filter(|record| !record.full_name.is_empty())
        .filter_map(|record| Some((record.full_name.as_str(), record.year_joined?)))
        .collect();
    let resigned: HashSet<(&str, i32)> = leavers
        .iter()
        .filter(|record| !record.full_name.is_empty())
        .filter_map(|record| Some((record.full_name.as_str(), record.calendar_year?)))
        .collect();

    years
        .iter()
        .map(|&year| {
            let joins = joined.iter().filter(|(_, y)| *y == year).count();
            let resignations = resigned.iter().filter(|(_, y)| *y == year).count();
            TalentFlow {
                year,
                joins,
                resignations,
                net_change: joins as i64 - resignations as i64,
            }
        })
        .collect()
}

fn window_index(year: i32) -> Option<usize> {
    REPORTING_YEARS
        .contains(&year)
        .then(|| (year - REPORTING_YEARS.start()) as usize)
}
