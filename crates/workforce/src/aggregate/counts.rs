//! Headcount by category.

use crate::record::{Category, EmployeeRecord, ExitType, Gender, Generation, PositionLevel};
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts per category, in display order.
///
/// Every category of [`Category::DISPLAY_ORDER`] is present, zero-filled.
/// Other observed values follow in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCounts<K> {
    entries: Vec<(K, usize)>,
}

impl<K: Category> CategoryCounts<K> {
    /// Count occurrences of each key.
    pub fn tally(keys: impl IntoIterator<Item = K>) -> Self {
        let mut entries: Vec<(K, usize)> = K::DISPLAY_ORDER.iter().map(|&key| (key, 0)).collect();
        for key in keys {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, count)) => *count += 1,
                None => entries.push((key, 1)),
            }
        }
        Self { entries }
    }

    /// Count for one category.
    pub fn get(&self, key: K) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(0, |(_, count)| *count)
    }

    /// Sum over every category.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Categories and counts, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Category labels, in display order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.to_string()).collect()
    }

    /// Counts, in display order.
    pub fn counts(&self) -> Vec<u32> {
        self.entries.iter().map(|(_, count)| *count as u32).collect()
    }

    /// Two-column frame: category label and count.
    pub fn to_frame(&self, label_column: &str, count_column: &str) -> PolarsResult<DataFrame> {
        df![
            label_column => self.labels(),
            count_column => self.counts()
        ]
    }
}

/// Headcount by gender.
pub fn headcount_by_gender(cohort: &[&EmployeeRecord]) -> CategoryCounts<Gender> {
    CategoryCounts::tally(cohort.iter().map(|record| record.gender))
}

/// Headcount by generation.
pub fn headcount_by_generation(cohort: &[&EmployeeRecord]) -> CategoryCounts<Generation> {
    CategoryCounts::tally(cohort.iter().map(|record| record.generation))
}

/// Headcount by position level.
pub fn headcount_by_position(cohort: &[&EmployeeRecord]) -> CategoryCounts<PositionLevel> {
    CategoryCounts::tally(cohort.iter().map(|record| record.position_level))
}

/// Leavers by exit type; records without an exit type are not counted.
pub fn exit_type_counts(cohort: &[&EmployeeRecord]) -> CategoryCounts<ExitType> {
    CategoryCounts::tally(cohort.iter().filter_map(|record| record.exit_type))
}

/// Counts per (age, generation), ascending by age then generation.
///
/// Records without an age are skipped.
pub fn age_distribution(cohort: &[&EmployeeRecord]) -> Vec<(u32, Generation, usize)> {
    let mut counts: BTreeMap<(u32, Generation), usize> = BTreeMap::new();
    for record in cohort {
        if let Some(age) = record.age {
            *counts.entry((age, record.generation)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|((age, generation), count)| (age, generation, count))
        .collect()
}
