//! Loading workforce data.
//!
//! Reads tabular input into [`RawRow`]s and normalizes them once. Every
//! column is read as text so that normalization, not the file reader,
//! decides how dates and numbers are interpreted.

use crate::columns::{self, ColumnSet};
use crate::normalize::normalize;
use crate::record::{EmployeeRecord, RawRow};
use crate::{Result, WorkforceError};
use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Normalized records plus the source columns they were built from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<EmployeeRecord>,
    columns: ColumnSet,
}

impl Dataset {
    /// Read a CSV file with a header row.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let frame = LazyCsvReader::new(path)
            .with_has_header(true)
            // Zero-length inference reads every column as text
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;
        debug!(path = %path.display(), rows = frame.height(), "read csv");
        Self::from_frame(&frame)
    }

    /// Build a dataset from an in-memory frame.
    ///
    /// Headers are matched ignoring surrounding whitespace and ASCII case.
    /// A missing `Full Name` column is an error; any other missing column is
    /// logged once and recorded in [`Dataset::columns`].
    pub fn from_frame(frame: &DataFrame) -> Result<Self> {
        let mut table: BTreeMap<&'static str, Vec<Option<String>>> = BTreeMap::new();
        for column in columns::ALL {
            match read_column(frame, column)? {
                Some(values) => {
                    table.insert(column, values);
                }
                None if column == columns::FULL_NAME => {
                    return Err(WorkforceError::MissingColumn(column.to_string()));
                }
                None => warn!(column, "column missing, dependent metrics unavailable"),
            }
        }

        let cell = |column: &str, row: usize| {
            table
                .get(column)
                .and_then(|values| values.get(row).cloned().flatten())
        };
        let rows: Vec<RawRow> = (0..frame.height())
            .map(|row| RawRow {
                full_name: cell(columns::FULL_NAME, row),
                gender: cell(columns::GENDER, row),
                generation: cell(columns::GENERATION, row),
                position_level: cell(columns::POSITION_LEVEL, row),
                status: cell(columns::STATUS, row),
                calendar_year: cell(columns::CALENDAR_YEAR, row),
                resignation_date: cell(columns::RESIGNATION_DATE, row),
                year_joined: cell(columns::YEAR_JOINED, row),
                tenure: cell(columns::TENURE, row),
                promotion_or_transfer: cell(columns::PROMOTION_OR_TRANSFER, row),
                age: cell(columns::AGE, row),
                exit_type: cell(columns::ATTRITION_TYPE, row),
            })
            .collect();

        Ok(Self::from_rows(&rows, table.keys().copied().collect()))
    }

    /// Build a dataset from raw rows, declaring which columns they carry.
    pub fn from_rows(rows: &[RawRow], columns: ColumnSet) -> Self {
        let records = normalize(rows);
        debug!(records = records.len(), "normalized rows");
        Self { records, columns }
    }

    /// Normalized records, in source order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Source columns present in the input.
    pub const fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read one known column as text, `None` when the frame lacks it.
fn read_column(frame: &DataFrame, canonical: &str) -> Result<Option<Vec<Option<String>>>> {
    let Some(name) = frame
        .get_column_names()
        .into_iter()
        .find(|name| name.trim().eq_ignore_ascii_case(canonical))
        .map(|name| name.to_string())
    else {
        return Ok(None);
    };

    let series = frame
        .column(&name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_owned))
        .collect();
    Ok(Some(values))
}
