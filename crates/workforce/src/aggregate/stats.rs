//! Summary statistics for tenure and age.

use crate::record::EmployeeRecord;
use serde::Serialize;

/// Count, mean, median and extremes of a set of values.
///
/// Statistics are `None` when there are no values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SummaryStats {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Median; the average of the two middle values for even counts
    pub median: Option<f64>,
    /// Smallest value
    pub min: Option<f64>,
    /// Largest value
    pub max: Option<f64>,
}

impl SummaryStats {
    /// Compute statistics over the given values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return Self::default();
        }
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        };

        Self {
            count,
            mean: Some(values.iter().sum::<f64>() / count as f64),
            median: Some(median),
            min: values.first().copied(),
            max: values.last().copied(),
        }
    }
}

/// Tenure statistics; records without tenure are skipped.
pub fn tenure_stats(cohort: &[&EmployeeRecord]) -> SummaryStats {
    SummaryStats::from_values(cohort.iter().filter_map(|record| record.tenure_years))
}

/// Age statistics; records without age are skipped.
pub fn age_stats(cohort: &[&EmployeeRecord]) -> SummaryStats {
    SummaryStats::from_values(
        cohort
            .iter()
            .filter_map(|record| record.age.map(f64::from)),
    )
}

/// One histogram bin, `[lower, upper)`; the last bin includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge
    pub upper: f64,
    /// Values in the bin
    pub count: usize,
}

/// Equal-width histogram spanning the range of `values`.
///
/// Returns no bins for empty input or `bins == 0`, and a single bin when
/// every value is equal.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();
    for value in values {
        let index = (((value - min) / width).floor() as usize).min(bins - 1);
        out[index].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::record::RawRow;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_stats_odd() {
        let stats = SummaryStats::from_values([5.0, 1.0, 3.0]);
        assert_eq!(stats.count, 3);
        assert_relative_eq!(stats.mean.unwrap(), 3.0);
        assert_relative_eq!(stats.median.unwrap(), 3.0);
        assert_relative_eq!(stats.min.unwrap(), 1.0);
        assert_relative_eq!(stats.max.unwrap(), 5.0);
    }

    #[test]
    fn test_summary_stats_even_median() {
        let stats = SummaryStats::from_values([4.0, 1.0, 2.0, 3.0]);
        assert_relative_eq!(stats.median.unwrap(), 2.5);
        assert_relative_eq!(stats.mean.unwrap(), 2.5);
    }

    #[test]
    fn test_empty_stats() {
        let stats = tenure_stats(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, None);
        assert_eq!(stats.median, None);
        assert_eq!(stats.max, None);
    }

    #[test]
    fn test_tenure_and_age_skip_missing() {
        let records = normalize(&[
            RawRow::named("A").tenure("1.5").age("30"),
            RawRow::named("B").tenure("n/a"),
            RawRow::named("C").tenure("4.5").age("40"),
        ]);
        let cohort: Vec<_> = records.iter().collect();

        let tenure = tenure_stats(&cohort);
        assert_eq!(tenure.count, 2);
        assert_relative_eq!(tenure.mean.unwrap(), 3.0);
        assert_relative_eq!(tenure.max.unwrap(), 4.5);

        let age = age_stats(&cohort);
        assert_eq!(age.count, 2);
        assert_relative_eq!(age.median.unwrap(), 35.0);
    }

    #[test]
    fn test_histogram() {
        let bins = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0, 10.0], 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 6);
        // Width 2: [0,2) [2,4) [4,6) [6,8) [8,10]
        assert_eq!(
            bins.iter().map(|b| b.count).collect::<Vec<_>>(),
            vec![2, 2, 1, 0, 1]
        );
        assert_relative_eq!(bins[4].upper, 10.0);
    }

    #[test]
    fn test_histogram_degenerate() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
        let single = histogram(&[2.0, 2.0], 10);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].count, 2);
    }
}
