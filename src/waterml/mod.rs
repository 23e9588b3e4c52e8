//! WaterML time-series importer
//!
//! This module parses a WaterML time-series XML document into point
//! observations, tolerating the format's irregularities: variable
//! attribute sets per point, qualifiers expressed as controlled-vocabulary
//! links instead of inline text, inconsistent timezone suffixes, and flag
//! tokens merged into value text.
//!
//! ## Architecture
//!
//! - [`parser`] - Single-pass event-stream parse and point projection
//! - [`timestamp`] - Three-branch timestamp normalization to UTC instants
//! - [`qualifier`] - Default resolution and the review-status vocabulary
//!
//! ## Usage
//!
//! ```rust
//! use nwis_processor::parse_waterml;
//!
//! # fn example(raw: &str) -> nwis_processor::Result<()> {
//! let points = parse_waterml(raw)?;
//!
//! println!("Parsed {} observations", points.len());
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod qualifier;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use parser::{parse_waterml, parse_waterml_bytes};
