//! Metric registry for discovery and introspection.
//!
//! The registry provides a centralized way to discover, instantiate, and
//! query metrics. It supports grouping by category, availability checks
//! against a dataset's columns, and bulk computation.

use crate::{Dataset, Metric, Query, Result, WorkforceError, columns::ColumnSet};
use derive_more::Display;
use polars::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Metric category for grouping related metrics.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricCategory {
    /// Workforce - headcount, demographics and tenure
    Workforce,
    /// Attrition - leavers, retention and net talent change
    Attrition,
    /// Career - promotions and transfers
    Career,
}

/// Metadata for metric introspection.
#[derive(Debug, Clone)]
pub struct MetricInfo {
    /// Metric name (unique identifier)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Metric category
    pub category: MetricCategory,
    /// Required source columns
    pub required_columns: Vec<String>,
}

/// Registry for metric discovery and computation.
#[derive(Debug, Default)]
pub struct MetricRegistry {
    metrics: HashMap<String, Arc<dyn Metric>>,
}

impl MetricRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            metrics: HashMap::new(),
        }
    }

    /// Register all standard metrics.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Workforce metrics
        registry.register(Arc::new(crate::workforce::HeadcountByPosition));
        registry.register(Arc::new(crate::workforce::HeadcountByGeneration));
        registry.register(Arc::new(crate::workforce::HeadcountByGender));
        registry.register(Arc::new(crate::workforce::TenureStats));
        registry.register(Arc::new(crate::workforce::AgeStats));
        registry.register(Arc::new(crate::workforce::AgeDistribution));

        // Attrition metrics
        registry.register(Arc::new(crate::attrition::WorkforceSummary));
        registry.register(Arc::new(crate::attrition::ResignationTrend));
        registry.register(Arc::new(crate::attrition::RetentionByGender));
        registry.register(Arc::new(crate::attrition::RetentionByGeneration));
        registry.register(Arc::new(crate::attrition::AttritionByMonth));
        registry.register(Arc::new(crate::attrition::AttritionByExitType));
        registry.register(Arc::new(crate::attrition::NetTalentChange));

        // Career metrics
        registry.register(Arc::new(crate::career::PromotionSummary));
        registry.register(Arc::new(crate::career::PromotionsByYear));
        registry.register(Arc::new(crate::career::PromotionsByPosition));
        registry.register(Arc::new(crate::career::PromotedTenureHistogram::default()));

        registry
    }

    /// Register a metric in the registry.
    pub fn register(&mut self, metric: Arc<dyn Metric>) {
        self.metrics.insert(metric.name().to_string(), metric);
    }

    /// Get a metric by name.
    pub fn get(&self, name: &str) -> Option<&dyn Metric> {
        self.metrics.get(name).map(|m| m.as_ref())
    }

    /// Get metrics by category.
    pub fn by_category(&self, category: MetricCategory) -> Vec<&dyn Metric> {
        self.metrics
            .values()
            .filter(|m| m.category() == category)
            .map(|m| m.as_ref())
            .collect()
    }

    /// Get all metric metadata.
    pub fn all_info(&self) -> Vec<MetricInfo> {
        self.metrics
            .values()
            .map(|m| MetricInfo {
                name: m.name().to_string(),
                description: m.description().to_string(),
                category: m.category(),
                required_columns: m.required_columns().iter().map(|s| s.to_string()).collect(),
            })
            .collect()
    }

    /// Get all metric names.
    pub fn names(&self) -> Vec<&str> {
        self.metrics.keys().map(|s| s.as_str()).collect()
    }

    /// Required columns of `metric` that `columns` lacks.
    pub fn missing_columns<'a>(metric: &'a dyn Metric, columns: &ColumnSet) -> Vec<&'a str> {
        columns.missing(metric.required_columns())
    }

    /// Whether the dataset's columns are enough to compute `metric`.
    pub fn is_available(metric: &dyn Metric, columns: &ColumnSet) -> bool {
        Self::missing_columns(metric, columns).is_empty()
    }

    /// Compute one metric by name.
    ///
    /// Fails with [`WorkforceError::NotFound`] for an unknown name and with
    /// [`WorkforceError::Unavailable`] when the dataset lacks a required
    /// column.
    pub fn compute(&self, name: &str, dataset: &Dataset, query: &Query) -> Result<DataFrame> {
        let metric = self
            .get(name)
            .ok_or_else(|| WorkforceError::NotFound(name.to_string()))?;
        let missing = Self::missing_columns(metric, dataset.columns());
        if !missing.is_empty() {
            return Err(WorkforceError::Unavailable {
                metric: name.to_string(),
                missing: missing.iter().map(|s| s.to_string()).collect(),
            });
        }
        debug!(metric = name, year = %query.year, "computing metric");
        metric.compute(dataset.records(), query)
    }

    /// Compute every available metric.
    ///
    /// Returns `(name, frame)` pairs sorted by name. Metrics whose columns
    /// are missing are skipped with a warning.
    pub fn compute_all(
        &self,
        dataset: &Dataset,
        query: &Query,
    ) -> Result<Vec<(String, DataFrame)>> {
        let mut names = self.names();
        names.sort_unstable();

        let mut frames = Vec::with_capacity(names.len());
        for name in names {
            match self.compute(name, dataset, query) {
                Ok(frame) => frames.push((name.to_string(), frame)),
                Err(WorkforceError::Unavailable { metric, missing }) => {
                    warn!(%metric, missing = %missing.join(", "), "skipping unavailable metric");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(frames)
    }

    /// Number of registered metrics.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{self, ColumnSet};
    use crate::record::RawRow;

    #[test]
    fn test_defaults_registered() {
        let registry = MetricRegistry::with_defaults();
        assert_eq!(registry.len(), 17);
        assert!(registry.get("workforce_summary").is_some());
        assert!(registry.get("resignation_trend").is_some());
        assert!(registry.get("no_such_metric").is_none());
        assert_eq!(registry.by_category(MetricCategory::Career).len(), 4);
    }

    #[test]
    fn test_all_metrics_have_info() {
        let registry = MetricRegistry::with_defaults();
        for info in registry.all_info() {
            assert!(!info.name.is_empty());
            assert!(!info.description.is_empty());
            assert!(info.required_columns.iter().any(|c| c == columns::FULL_NAME));
        }
    }

    #[test]
    fn test_compute_unknown_metric() {
        let registry = MetricRegistry::with_defaults();
        let err = registry
            .compute("no_such_metric", &Dataset::default(), &Query::default())
            .unwrap_err();
        assert!(matches!(err, WorkforceError::NotFound(_)));
    }

    #[test]
    fn test_missing_columns_make_metric_unavailable() {
        let registry = MetricRegistry::with_defaults();
        let columns: ColumnSet = [columns::FULL_NAME, columns::STATUS, columns::CALENDAR_YEAR]
            .into_iter()
            .collect();
        let dataset = Dataset::from_rows(
            &[RawRow::named("Jane Doe").status("ACTIVE").calendar_year("2023")],
            columns,
        );

        let err = registry
            .compute("tenure_stats", &dataset, &Query::default())
            .unwrap_err();
        assert!(matches!(err, WorkforceError::Unavailable { .. }));

        let frames = registry.compute_all(&dataset, &Query::default()).unwrap();
        let names: Vec<_> = frames.iter().map(|(name, _)| name.as_str()).collect();
        assert!(names.contains(&"workforce_summary"));
        assert!(!names.contains(&"tenure_stats"));
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_compute_all_with_every_column() {
        let registry = MetricRegistry::with_defaults();
        let dataset = Dataset::from_rows(
            &[RawRow::named("Jane Doe").status("ACTIVE").calendar_year("2023")],
            ColumnSet::all(),
        );
        let frames = registry.compute_all(&dataset, &Query::default()).unwrap();
        assert_eq!(frames.len(), registry.len());
    }
}
