//! Format constants for NWIS feed processing
//!
//! This module contains the fixed markers, suffix conventions, and
//! vocabulary tables of the RDB and WaterML formats.

// =============================================================================
// RDB Tabular Format
// =============================================================================

/// Comment marker prefixing RDB header lines
pub const COMMENT_MARKER: char = '#';

/// Field delimiter for RDB documents
pub const RDB_DELIMITER: u8 = b'\t';

/// Column-name suffix forcing floating-point coercion (measured values)
pub const NUMERIC_VALUE_SUFFIX: &str = "_va";

/// Column-name suffix forcing integer coercion (numeric identifiers)
pub const NUMERIC_ID_SUFFIX: &str = "_nu";

/// Per-column type codes from the RDB type-declaration line
pub mod type_codes {
    /// String column
    pub const STRING: char = 's';

    /// Numeric column
    pub const NUMERIC: char = 'n';

    /// Date column (kept as text; callers parse per their conventions)
    pub const DATE: char = 'd';
}

// =============================================================================
// WaterML Time Series
// =============================================================================

/// Sentinel for observations whose value is absent or unusable
pub const NO_DATA_VALUE: f64 = -999_999.0;

/// Estimated-flag token the upstream service merges into value text
pub const ESTIMATED_FLAG_TOKEN: &str = "true";

/// Stripped timestamp literals longer than this carry a numeric UTC offset
pub const OFFSET_TIMESTAMP_LEN: usize = 18;

/// Review-status qualifier vocabulary
pub mod qualifiers {
    /// Full provisional qualifier phrase as delivered by the service
    pub const PROVISIONAL_TEXT: &str = "Provisional data subject to revision.";

    /// Short code for provisional observations
    pub const PROVISIONAL_CODE: &str = "P";

    /// Full approved qualifier phrase as delivered by the service
    pub const APPROVED_TEXT: &str =
        "Approved for publication. Processing and review completed.";

    /// Short code for approved observations
    pub const APPROVED_CODE: &str = "A";
}
