//! Post-parse validity classification.
//!
//! The upstream service answers bad arguments and outages with an HTML
//! error page on the same endpoint that normally serves tabular data. An
//! error page that survives tabular parsing shows up as a table with
//! exactly one column; a well-formed but data-free response shows up with
//! zero rows. Callers apply this classification before consuming rows.

use crate::models::{Table, ValidityOutcome};

/// Classify a parsed table as empty, malformed, or valid
///
/// Pure function of row and column counts. A zero-row table is `Empty`
/// regardless of column count. `Malformed` should be surfaced as a warning
/// and the table replaced with [`Table::empty`]; `Empty` should be
/// surfaced as a warning with zero rows returned. Both policies belong to
/// the caller, not to this function.
pub fn classify(table: &Table) -> ValidityOutcome {
    if table.row_count() == 0 {
        ValidityOutcome::Empty
    } else if table.column_count() == 1 {
        ValidityOutcome::Malformed
    } else {
        ValidityOutcome::Valid
    }
}
