//! Source column catalog.
//!
//! Names of the spreadsheet headers the loader understands, and the set of
//! them present in a given dataset.

use std::collections::BTreeSet;

/// Employee name; the identity key.
pub const FULL_NAME: &str = "Full Name";
/// Gender.
pub const GENDER: &str = "Gender";
/// Generation label.
pub const GENERATION: &str = "Generation";
/// Position level.
pub const POSITION_LEVEL: &str = "Position/Level";
/// Free-text employment status.
pub const STATUS: &str = "Resignee Checking";
/// Snapshot date.
pub const CALENDAR_YEAR: &str = "Calendar Year";
/// Resignation date.
pub const RESIGNATION_DATE: &str = "Resignation Date";
/// Join date or year.
pub const YEAR_JOINED: &str = "Year Joined";
/// Tenure in years.
pub const TENURE: &str = "Tenure";
/// Promotion or transfer flag.
pub const PROMOTION_OR_TRANSFER: &str = "Promotion & Transfer";
/// Age in years.
pub const AGE: &str = "Age";
/// Voluntary/involuntary exit label.
pub const ATTRITION_TYPE: &str = "Attrition Type";

/// Every known column, in source order.
pub const ALL: [&str; 12] = [
    FULL_NAME,
    GENDER,
    GENERATION,
    POSITION_LEVEL,
    STATUS,
    CALENDAR_YEAR,
    RESIGNATION_DATE,
    YEAR_JOINED,
    TENURE,
    PROMOTION_OR_TRANSFER,
    AGE,
    ATTRITION_TYPE,
];

/// Known columns present in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSet {
    present: BTreeSet<&'static str>,
}

impl ColumnSet {
    /// A set with every known column.
    pub fn all() -> Self {
        ALL.into_iter().collect()
    }

    /// Whether the column is present.
    pub fn contains(&self, column: &str) -> bool {
        self.present.contains(column)
    }

    /// Columns from `required` that are absent.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|column| !self.contains(column))
            .collect()
    }

    /// Present columns, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.present.iter().copied()
    }
}

impl FromIterator<&'static str> for ColumnSet {
    fn from_iter<T: IntoIterator<Item = &'static str>>(iter: T) -> Self {
        Self {
            present: iter.into_iter().collect(),
        }
    }
}
