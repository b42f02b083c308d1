#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod attrition;
pub mod career;
pub mod cohort;
pub mod columns;
pub mod error;
pub mod load;
pub mod normalize;
pub mod period;
pub mod record;
pub mod registry;
pub mod traits;
pub mod workforce;

// Re-export core types
pub use cohort::{Dedup, select_cohort};
pub use columns::ColumnSet;
pub use error::{Result, WorkforceError};
pub use load::Dataset;
pub use normalize::normalize;
pub use period::{MonthSelection, Query, REPORTING_YEARS, YearFilter};
pub use record::{EmployeeRecord, ExitType, Gender, Generation, PositionLevel, RawRow, Status};
pub use registry::{MetricCategory, MetricInfo, MetricRegistry};
pub use traits::{ConfigurableMetric, Metric, MetricConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
