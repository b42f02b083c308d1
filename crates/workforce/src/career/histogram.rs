//! Tenure distribution of promoted employees.

use super::active_by_year;
use crate::{
    EmployeeRecord, Query, Result,
    aggregate::histogram,
    columns,
    registry::MetricCategory,
    traits::{ConfigurableMetric, Metric},
};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration for the promoted-tenure histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Number of equal-width bins.
    pub bins: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { bins: 10 }
    }
}

/// Tenure histogram of promoted or transferred active employees.
///
/// Bins span the observed tenure range; a single bin is returned when every
/// tenure is equal and no bins when nobody qualifies.
///
/// # Returns
/// DataFrame with columns: `lower`, `upper`, `count`
#[derive(Debug, Clone, Default)]
pub struct PromotedTenureHistogram {
    config: HistogramConfig,
}

impl Metric for PromotedTenureHistogram {
    fn name(&self) -> &str {
        "promoted_tenure_histogram"
    }

    fn description(&self) -> &str {
        "Tenure distribution of promoted or transferred active employees"
    }

    fn category(&self) -> MetricCategory {
        MetricCategory::Career
    }

    fn required_columns(&self) -> &[&str] {
        &[
            columns::FULL_NAME,
            columns::STATUS,
            columns::CALENDAR_YEAR,
            columns::PROMOTION_OR_TRANSFER,
            columns::TENURE,
        ]
    }

    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame> {
        let tenures: Vec<f64> = active_by_year(records, query.year)
            .into_iter()
            .filter(|record| record.promotion_or_transfer)
            .filter_map(|record| record.tenure_years)
            .collect();
        let bins = histogram(&tenures, self.config.bins);

        Ok(df![
            "lower" => bins.iter().map(|bin| bin.lower).collect::<Vec<_>>(),
            "upper" => bins.iter().map(|bin| bin.upper).collect::<Vec<_>>(),
            "count" => bins.iter().map(|bin| bin.count as u32).collect::<Vec<_>>()
        ]?)
    }
}

impl ConfigurableMetric for PromotedTenureHistogram {
    type Config = HistogramConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
