//! Parsing statistics for RDB imports
//!
//! Counters for the irregularities the importer tolerates. They are
//! summarized once through tracing at the end of a parse call and never
//! itemized to the caller.

use serde::{Deserialize, Serialize};

/// Per-call parsing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of data records encountered
    pub total_records: usize,

    /// Number of rows carried into the resulting table
    pub rows_parsed: usize,

    /// Number of records skipped because they could not be decoded
    pub records_skipped: usize,

    /// Rows shorter than the header, padded with trailing nulls
    pub short_rows_padded: usize,

    /// Rows longer than the header, truncated to the header width
    pub long_rows_truncated: usize,

    /// Cells that failed their declared type and degraded to null
    pub cells_nulled: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate row-level success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check whether any degradation was recorded
    pub fn is_clean(&self) -> bool {
        self.records_skipped == 0
            && self.short_rows_padded == 0
            && self.long_rows_truncated == 0
            && self.cells_nulled == 0
    }
}
