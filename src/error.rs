//! Error handling for NWIS feed imports.
//!
//! Provides structural error types with context for document decoding,
//! header location, and markup parsing failures. Per-cell and per-point
//! irregularities are not errors: they degrade to null cells or dropped
//! points and are summarized through tracing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NwisError {
    #[error("document is not valid UTF-8 text: {reason}")]
    Encoding { reason: String },

    #[error("no header line found in RDB document: {reason}")]
    NoHeaderLine { reason: String },

    #[error("RDB format error at {stage}: {reason}")]
    RdbFormat { stage: String, reason: String },

    #[error("WaterML document is not well-formed markup: {reason}")]
    XmlFormat { reason: String },

    #[error("XML parsing failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("CSV decoding failed: {0}")]
    Csv(#[from] csv::Error),
}

impl NwisError {
    /// Create an encoding error from a UTF-8 decode failure
    pub fn encoding(reason: impl Into<String>) -> Self {
        Self::Encoding {
            reason: reason.into(),
        }
    }

    /// Create a missing-header error
    pub fn no_header_line(reason: impl Into<String>) -> Self {
        Self::NoHeaderLine {
            reason: reason.into(),
        }
    }

    /// Create an RDB format error with stage context
    pub fn rdb_format(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RdbFormat {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed-markup error
    pub fn xml_format(reason: impl Into<String>) -> Self {
        Self::XmlFormat {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NwisError>;
