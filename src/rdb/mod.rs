//! RDB tabular importer for NWIS delimited documents
//!
//! This module parses the tab-delimited, comment-annotated format served by
//! the NWIS tabular endpoints into a typed [`crate::models::Table`], then
//! optionally applies the suffix-driven coercion pass.
//!
//! ## Architecture
//!
//! The importer is organized into logical components:
//! - [`parser`] - Core parsing orchestration: comment block, header, rows
//! - [`type_hints`] - Type-declaration line recognition and extraction
//! - [`coercion`] - Suffix-driven numeric/integer column override pass
//! - [`stats`] - Per-call parsing statistics, summarized through tracing
//!
//! ## Usage
//!
//! ```rust
//! use nwis_processor::{coerce_types, parse_rdb};
//!
//! # fn example(raw: &str) -> nwis_processor::Result<()> {
//! let table = coerce_types(parse_rdb(raw)?, true);
//!
//! println!("Parsed {} rows across {} columns",
//!          table.row_count(),
//!          table.column_count());
//! # Ok(())
//! # }
//! ```

pub mod coercion;
pub mod parser;
pub mod stats;
pub mod type_hints;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use coercion::coerce_types;
pub use parser::{parse_rdb, parse_rdb_bytes};
pub use type_hints::ColumnTypeHints;
