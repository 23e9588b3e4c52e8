//! Core RDB parser implementation
//!
//! This module provides the main parser orchestration: comment-block
//! accumulation, type-declaration extraction, header analysis, and row
//! decoding with degrade-to-null cell handling.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::stats::ParseStats;
use super::type_hints::{ColumnTypeHints, is_type_declaration, parse_type_declaration};
use crate::constants::{COMMENT_MARKER, RDB_DELIMITER};
use crate::error::{NwisError, Result};
use crate::models::{Cell, CommentBlock, Table};

/// Parse an RDB document into a typed table
///
/// Fails only on structurally unrecoverable input: a document with no
/// header line at all (empty or pure-comment input). Every other
/// irregularity (short rows, long rows, cells that do not satisfy their
/// declared type) degrades to null cells, is counted, and is summarized
/// once through tracing.
pub fn parse_rdb(raw: &str) -> Result<Table> {
    let mut stats = ParseStats::new();

    let (mut comment_lines, data_region) = split_sections(raw)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(RDB_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(data_region.as_bytes());

    // Header names are taken verbatim; a duplicate is a source-feed defect
    // that must not fail the parse, so the first occurrence wins.
    let header_fields: Vec<String> = csv_reader
        .headers()
        .map_err(|e| NwisError::rdb_format("header", e.to_string()))?
        .iter()
        .map(|name| name.trim().to_string())
        .collect();

    let mut columns: Vec<String> = Vec::with_capacity(header_fields.len());
    for name in &header_fields {
        if columns.contains(name) {
            warn!("Duplicate column name '{}' in RDB header; keeping first occurrence", name);
        } else {
            columns.push(name.clone());
        }
    }

    let hints = extract_type_hints(&mut comment_lines, &header_fields);
    debug!(
        "RDB header: {} columns, {} type hints, {} comment lines",
        columns.len(),
        hints.len(),
        comment_lines.len()
    );

    let mut rows: Vec<HashMap<String, Cell>> = Vec::new();
    for result in csv_reader.records() {
        stats.total_records += 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                stats.records_skipped += 1;
                debug!("Skipped record {}: {}", stats.total_records, e);
                continue;
            }
        };

        if record.len() < header_fields.len() {
            stats.short_rows_padded += 1;
        } else if record.len() > header_fields.len() {
            stats.long_rows_truncated += 1;
        }

        let mut row = HashMap::with_capacity(columns.len());
        for (index, name) in header_fields.iter().enumerate() {
            let cell = match record.get(index) {
                Some(field) => typed_cell(field, name, &hints, &mut stats),
                None => Cell::Null,
            };
            row.entry(name.clone()).or_insert(cell);
        }
        rows.push(row);
        stats.rows_parsed += 1;
    }

    if stats.cells_nulled > 0 {
        warn!(
            "{} cells failed their declared type and were stored as null",
            stats.cells_nulled
        );
    }
    debug!(
        "Parsed RDB document: {} rows from {} records ({:.0}% usable)",
        stats.rows_parsed,
        stats.total_records,
        stats.success_rate()
    );

    Ok(Table {
        columns,
        rows,
        comments: CommentBlock::new(comment_lines),
    })
}

/// Parse an RDB document from raw bytes
///
/// Convenience entry point for callers holding an undecoded response body.
pub fn parse_rdb_bytes(raw: &[u8]) -> Result<Table> {
    let text = std::str::from_utf8(raw).map_err(|e| NwisError::encoding(e.to_string()))?;
    parse_rdb(text)
}

/// Split a document into its comment block and the header-plus-rows region
fn split_sections(raw: &str) -> Result<(Vec<String>, String)> {
    let lines: Vec<&str> = raw.lines().collect();
    let mut comment_lines: Vec<String> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if line.starts_with(COMMENT_MARKER) {
            comment_lines.push((*line).to_string());
        } else if line.trim().is_empty() {
            continue;
        } else {
            return Ok((comment_lines, lines[index..].join("\n")));
        }
    }

    let reason = if raw.trim().is_empty() {
        "document is empty"
    } else {
        "document contains only comment lines"
    };
    Err(NwisError::no_header_line(reason))
}

/// Pull the type-declaration line off the end of the comment block
///
/// Consumed only when the final comment line actually matches the
/// width-plus-code token shape; an ordinary closing comment stays in the
/// block and no hints apply.
fn extract_type_hints(comment_lines: &mut Vec<String>, header_fields: &[String]) -> ColumnTypeHints {
    let declares_types = comment_lines
        .last()
        .is_some_and(|line| is_type_declaration(line));
    if declares_types {
        if let Some(line) = comment_lines.pop() {
            return parse_type_declaration(&line, header_fields);
        }
    }
    ColumnTypeHints::default()
}

/// Type a single cell under its column's hint
///
/// Empty cells are null under every hint. A non-empty cell in a
/// numeric-hinted column that does not parse degrades to null and is
/// counted, never propagated.
fn typed_cell(field: &str, column: &str, hints: &ColumnTypeHints, stats: &mut ParseStats) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Null;
    }

    if hints.is_numeric(column) {
        match trimmed.parse::<f64>() {
            Ok(number) => Cell::Number(number),
            Err(_) => {
                stats.cells_nulled += 1;
                Cell::Null
            }
        }
    } else {
        Cell::Text(trimmed.to_string())
    }
}
