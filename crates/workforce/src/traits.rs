//! Core trait definitions for metrics.
//!
//! Every dashboard metric implements the [`Metric`] trait, which provides a
//! unified interface for turning normalized records into a flat frame that a
//! charting collaborator can plot directly.

use crate::{EmployeeRecord, MetricCategory, Query, Result};
use polars::prelude::*;

/// A metric computed from normalized employee records.
///
/// Implementations select their own cohort from the records and the
/// [`Query`]; they never mutate the records and hold no state between calls.
pub trait Metric: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this metric.
    ///
    /// Should be snake_case and stable across versions.
    fn name(&self) -> &str;

    /// Human-readable description of what this metric measures.
    fn description(&self) -> &str;

    /// Metric category for grouping on the dashboard.
    fn category(&self) -> MetricCategory;

    /// Source columns this metric needs.
    ///
    /// A dataset lacking any of them reports the metric as unavailable
    /// instead of computing it from empty cells.
    fn required_columns(&self) -> &[&str];

    /// Compute the metric.
    ///
    /// Empty cohorts yield zero-filled or empty frames, never an error.
    fn compute(&self, records: &[EmployeeRecord], query: &Query) -> Result<DataFrame>;
}

/// Marker trait for metric configuration types.
///
/// All config types should implement Default, Clone, Send, Sync, and Debug.
pub trait MetricConfig: Default + Clone + Send + Sync + std::fmt::Debug {}

/// A metric that supports runtime configuration.
pub trait ConfigurableMetric: Metric {
    /// Configuration type for this metric.
    type Config: MetricConfig;

    /// Create a new metric with the given configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Returns the current configuration.
    fn config(&self) -> &Self::Config;
}

/// Blanket implementation for any type that satisfies the trait bounds.
impl<T: Default + Clone + Send + Sync + std::fmt::Debug> MetricConfig for T {}
