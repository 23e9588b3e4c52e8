//! NWIS Processor Library
//!
//! A Rust library for normalizing heterogeneous USGS NWIS water-data
//! feeds into typed, tabular, in-memory records.
//!
//! This library provides tools for:
//! - Parsing RDB tab-delimited documents with comment-block and
//!   type-declaration handling
//! - Forcing `_va`/`_nu` columns to numeric/integer types via the
//!   suffix-coercion pass
//! - Parsing WaterML time-series documents into point observations with
//!   qualifier and timestamp normalization
//! - Classifying parse results as empty, malformed, or valid before
//!   rows are consumed
//!
//! The library performs no I/O and owns no transport concerns: callers
//! fetch a document, hand it to the relevant importer, and apply
//! [`classify`] before consuming rows. Parse calls share no state and may
//! run concurrently on different documents.

pub mod constants;
pub mod error;
pub mod models;
pub mod rdb;
pub mod validity;
pub mod waterml;

// Re-export commonly used types
pub use error::{NwisError, Result};
pub use models::{Cell, CommentBlock, Table, TimeSeriesPoint, ValidityOutcome};
pub use rdb::{coerce_types, parse_rdb, parse_rdb_bytes};
pub use validity::classify;
pub use waterml::{parse_waterml, parse_waterml_bytes};
