//! Reporting periods and query parameters.
//!
//! A [`Query`] carries everything a dashboard view can change: the selected
//! year and the month multi-select. Metrics receive it explicitly instead of
//! reading shared UI state.

use crate::{Result, WorkforceError};
use derive_more::Display;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Calendar years covered by "all years" reports.
pub const REPORTING_YEARS: RangeInclusive<i32> = 2020..=2025;

/// Month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a month number (1-12).
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
}

/// Year selection for a report.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearFilter {
    /// Every year of [`REPORTING_YEARS`]
    #[default]
    All,
    /// A single calendar year
    #[display("{_0}")]
    Year(i32),
}

impl YearFilter {
    /// Whether a record year falls inside the selection.
    ///
    /// Records without a year never match.
    pub fn contains(self, year: Option<i32>) -> bool {
        match (self, year) {
            (Self::All, Some(year)) => REPORTING_YEARS.contains(&year),
            (Self::Year(selected), Some(year)) => selected == year,
            (_, None) => false,
        }
    }

    /// Years covered by the selection, ascending.
    pub fn years(self) -> Vec<i32> {
        match self {
            Self::All => REPORTING_YEARS.collect(),
            Self::Year(year) => vec![year],
        }
    }
}

impl FromStr for YearFilter {
    type Err = WorkforceError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match s.parse::<i32>() {
            Ok(year) if REPORTING_YEARS.contains(&year) => Ok(Self::Year(year)),
            _ => Err(WorkforceError::InvalidYear(s.to_string())),
        }
    }
}

/// Month multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MonthSelection {
    /// No month restriction
    #[default]
    All,
    /// Only the listed months (1-12)
    Only(BTreeSet<u32>),
}

impl MonthSelection {
    /// Build a selection from dashboard labels.
    ///
    /// "All" anywhere in the list, or an empty list, selects every month.
    /// Month names are matched case-insensitively, by full name or by their
    /// three-letter abbreviation.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut months = BTreeSet::new();
        for label in labels {
            let label = label.as_ref().trim();
            if label.eq_ignore_ascii_case("all") {
                return Ok(Self::All);
            }
            months.insert(parse_month(label)?);
        }
        Ok(if months.is_empty() {
            Self::All
        } else {
            Self::Only(months)
        })
    }

    /// Whether a month passes the selection.
    ///
    /// Under [`MonthSelection::All`] an unknown month passes too.
    pub fn contains(&self, month: Option<u32>) -> bool {
        match self {
            Self::All => true,
            Self::Only(months) => month.is_some_and(|m| months.contains(&m)),
        }
    }

    /// Months to report, in calendar order.
    pub fn months(&self) -> Vec<u32> {
        match self {
            Self::All => (1..=12).collect(),
            Self::Only(months) => months.iter().copied().collect(),
        }
    }
}

fn parse_month(label: &str) -> Result<u32> {
    MONTH_NAMES
        .iter()
        .position(|name| {
            name.eq_ignore_ascii_case(label)
                || (label.len() == 3 && name[..3].eq_ignore_ascii_case(label))
        })
        .map(|index| index as u32 + 1)
        .ok_or_else(|| WorkforceError::InvalidMonth(label.to_string()))
}

/// Parameters of one dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Selected year or the whole reporting window
    pub year: YearFilter,
    /// Month multi-select, used by month-aware metrics
    pub months: MonthSelection,
}

impl Query {
    /// Query for a year with no month restriction.
    pub const fn new(year: YearFilter) -> Self {
        Self {
            year,
            months: MonthSelection::All,
        }
    }

    /// Restrict month-aware metrics to the given selection.
    pub fn with_months(mut self, months: MonthSelection) -> Self {
        self.months = months;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("all", YearFilter::All)]
    #[case("All", YearFilter::All)]
    #[case(" 2023 ", YearFilter::Year(2023))]
    #[case("2020", YearFilter::Year(2020))]
    #[case("2025", YearFilter::Year(2025))]
    fn test_parse_year_filter(#[case] input: &str, #[case] expected: YearFilter) {
        assert_eq!(input.parse::<YearFilter>().unwrap(), expected);
    }

    #[rstest]
    #[case("2019")]
    #[case("2026")]
    #[case("last year")]
    fn test_parse_year_filter_rejects(#[case] input: &str) {
        assert!(matches!(
            input.parse::<YearFilter>(),
            Err(WorkforceError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_year_filter_contains() {
        assert!(YearFilter::All.contains(Some(2020)));
        assert!(YearFilter::All.contains(Some(2025)));
        assert!(!YearFilter::All.contains(Some(2019)));
        assert!(!YearFilter::All.contains(None));
        assert!(YearFilter::Year(2022).contains(Some(2022)));
        assert!(!YearFilter::Year(2022).contains(Some(2023)));
        assert_eq!(YearFilter::All.years().len(), 6);
        assert_eq!(YearFilter::Year(2022).to_string(), "2022");
        assert_eq!(YearFilter::All.to_string(), "All");
    }

    #[test]
    fn test_month_selection_all_wins() {
        let selection = MonthSelection::from_labels(["March", "All"]).unwrap();
        assert_eq!(selection, MonthSelection::All);

        let empty: [&str; 0] = [];
        assert_eq!(MonthSelection::from_labels(empty).unwrap(), MonthSelection::All);
    }

    #[test]
    fn test_month_selection_only() {
        let selection = MonthSelection::from_labels(["december", "Mar"]).unwrap();
        assert_eq!(selection.months(), vec![3, 12]);
        assert!(selection.contains(Some(3)));
        assert!(!selection.contains(Some(4)));
        assert!(!selection.contains(None));
        assert!(MonthSelection::All.contains(None));
    }

    #[test]
    fn test_month_selection_rejects_unknown() {
        assert!(matches!(
            MonthSelection::from_labels(["Smarch"]),
            Err(WorkforceError::InvalidMonth(_))
        ));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
