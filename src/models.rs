//! Core data structures for NWIS feed processing.
//!
//! Defines the typed cell and table model produced by the RDB importer,
//! the time-series point model produced by the WaterML importer, and the
//! post-parse validity classification shared by callers of both.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single typed cell in a parsed table
///
/// Concrete cell types may vary within a column straight out of the
/// importer; after suffix coercion, forced columns hold only their forced
/// type or `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Number(f64),
    Null,
}

impl Cell {
    /// Check whether this cell is the null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Get the text content, if this cell is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get a floating-point view of a numeric cell
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the integer content, if this cell is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

/// Comment lines preserved verbatim from an RDB document header
///
/// The type-declaration line is not part of the block. Callers that need
/// embedded metadata (rating-curve coefficients and similar) scan these
/// lines themselves; the importer attaches them without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentBlock {
    pub lines: Vec<String>,
}

impl CommentBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the preserved lines in document order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// A parsed tabular document
///
/// Column order follows the document; every row carries exactly the
/// header's column set, padded with [`Cell::Null`] where the source row
/// was short.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Ordered, unique column names
    pub columns: Vec<String>,

    /// Ordered rows, each mapping column name to cell
    pub rows: Vec<HashMap<String, Cell>>,

    /// Header comment lines attached as auxiliary metadata
    pub comments: CommentBlock,
}

impl Table {
    /// An explicitly empty table: no columns, no rows, no comments
    ///
    /// The documented replacement for a [`ValidityOutcome::Malformed`]
    /// result, so downstream column access cannot operate on garbage.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a cell by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

/// One timestamped observation from a WaterML document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Absolute instant of the observation
    pub timestamp: DateTime<Utc>,

    /// Observed value; [`crate::constants::NO_DATA_VALUE`] when absent or
    /// unusable
    pub value: f64,

    /// Review-status qualifier code, if one was declared or defaulted
    pub qualifier: Option<String>,
}

impl TimeSeriesPoint {
    /// Seconds since the UNIX epoch
    pub fn epoch_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }
}

/// Post-parse classification of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidityOutcome {
    /// No data rows; likely invalid arguments or an unavailable resource
    Empty,

    /// Exactly one column: the characteristic symptom of an error page
    /// delivered where tabular data was expected
    Malformed,

    /// Usable tabular data
    Valid,
}

impl ValidityOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidityOutcome::Valid)
    }
}
