//! Suffix-driven type coercion for parsed tables
//!
//! Upstream documents are not reliably self-describing: the embedded type
//! hints and the column-name suffix convention are two competing type
//! systems over the same data, and the suffix is the stronger signal. This
//! pass forces `_va` columns to floating point and `_nu` columns to
//! integer, overriding whatever the hint pass produced. It is total and
//! idempotent; a cell that cannot satisfy its forced type becomes null.

use tracing::warn;

use crate::constants::{NUMERIC_ID_SUFFIX, NUMERIC_VALUE_SUFFIX};
use crate::models::{Cell, Table};

#[derive(Debug, Clone, Copy)]
enum ForcedType {
    Number,
    Integer,
}

/// Apply the suffix coercion rules to a table
///
/// With `enabled == false` the table is returned untouched; the switch is
/// part of the public contract so callers with exotic column conventions
/// can opt out. Coercion gaps degrade to null cells and are summarized
/// once, never itemized.
pub fn coerce_types(mut table: Table, enabled: bool) -> Table {
    if !enabled {
        return table;
    }

    let forced: Vec<(String, ForcedType)> = table
        .columns
        .iter()
        .filter_map(|column| {
            if column.ends_with(NUMERIC_VALUE_SUFFIX) {
                Some((column.clone(), ForcedType::Number))
            } else if column.ends_with(NUMERIC_ID_SUFFIX) {
                Some((column.clone(), ForcedType::Integer))
            } else {
                None
            }
        })
        .collect();

    if forced.is_empty() {
        return table;
    }

    let mut gaps = 0usize;
    for row in &mut table.rows {
        for (column, forced_type) in &forced {
            if let Some(cell) = row.get_mut(column) {
                let (coerced, gap) = match forced_type {
                    ForcedType::Number => coerce_number(cell),
                    ForcedType::Integer => coerce_integer(cell),
                };
                if gap {
                    gaps += 1;
                }
                *cell = coerced;
            }
        }
    }

    if gaps > 0 {
        warn!(
            "{} cells in forced numeric columns could not be converted and were stored as null",
            gaps
        );
    }

    table
}

fn coerce_number(cell: &Cell) -> (Cell, bool) {
    match cell {
        Cell::Number(n) => (Cell::Number(*n), false),
        Cell::Integer(i) => (Cell::Number(*i as f64), false),
        Cell::Null => (Cell::Null, false),
        Cell::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => (Cell::Number(n), false),
            Err(_) => (Cell::Null, true),
        },
    }
}

fn coerce_integer(cell: &Cell) -> (Cell, bool) {
    match cell {
        Cell::Integer(i) => (Cell::Integer(*i), false),
        Cell::Null => (Cell::Null, false),
        Cell::Number(n) if n.fract() == 0.0 => (Cell::Integer(*n as i64), false),
        Cell::Number(_) => (Cell::Null, true),
        Cell::Text(s) => match s.trim().parse::<i64>() {
            Ok(i) => (Cell::Integer(i), false),
            Err(_) => (Cell::Null, true),
        },
    }
}
