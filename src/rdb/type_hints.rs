//! Type-declaration line recognition for RDB documents
//!
//! The last line of the comment block may declare per-column type codes
//! aligned positionally with the header line that follows, each token a
//! field width plus a one-character code (`5s`, `20d`, `14n`). A final
//! comment line that does not match this shape is ordinary commentary and
//! yields no hints.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{COMMENT_MARKER, type_codes};

static TYPE_CODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*[A-Za-z]$").expect("type code pattern is valid"));

/// Per-column type codes taken from the type-declaration line
///
/// Used only for initial cell typing; the suffix coercion pass applies
/// independently and may override it.
#[derive(Debug, Clone, Default)]
pub struct ColumnTypeHints {
    by_column: HashMap<String, char>,
}

impl ColumnTypeHints {
    /// Check whether a column was declared numeric
    pub fn is_numeric(&self, column: &str) -> bool {
        self.by_column.get(column) == Some(&type_codes::NUMERIC)
    }

    /// Get the declared code for a column
    pub fn code(&self, column: &str) -> Option<char> {
        self.by_column.get(column).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_column.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_column.len()
    }
}

/// Check whether a comment line is a type-declaration line
///
/// Every tab-separated token must match the width-plus-code shape.
pub(crate) fn is_type_declaration(line: &str) -> bool {
    let body = line.trim_start_matches(COMMENT_MARKER);
    let mut tokens = body.split('\t').map(str::trim).peekable();
    if tokens.peek().is_none() {
        return false;
    }
    tokens.all(|token| TYPE_CODE_TOKEN.is_match(token))
}

/// Zip a type-declaration line positionally with the header names
///
/// A duplicate header name keeps its first occurrence's binding; surplus
/// tokens on either side are ignored.
pub(crate) fn parse_type_declaration(line: &str, header_fields: &[String]) -> ColumnTypeHints {
    let body = line.trim_start_matches(COMMENT_MARKER);
    let mut by_column = HashMap::new();

    for (name, token) in header_fields.iter().zip(body.split('\t').map(str::trim)) {
        if let Some(code) = token.chars().last() {
            by_column
                .entry(name.clone())
                .or_insert(code.to_ascii_lowercase());
        }
    }

    ColumnTypeHints { by_column }
}
