//! Tests for RDB document parsing

use super::{sample_document, sample_document_without_types};
use crate::error::NwisError;
use crate::models::Cell;
use crate::rdb::parser::{parse_rdb, parse_rdb_bytes};

#[test]
fn test_parse_full_document() {
    let table = parse_rdb(&sample_document()).unwrap();

    assert_eq!(
        table.columns,
        vec!["agency_cd", "site_no", "datetime", "discharge_va", "remark_cd"]
    );
    assert_eq!(table.row_count(), 2);

    // Comment block keeps the annotations verbatim, minus the type line
    assert_eq!(table.comments.len(), 3);
    assert_eq!(
        table.comments.lines[0],
        "# Data provided for site 01646500"
    );
    assert!(table.comments.iter().all(|line| !line.contains("5s")));
}

#[test]
fn test_hint_typed_cells() {
    let table = parse_rdb(&sample_document()).unwrap();

    // Numeric hint parses where it can and degrades to null where it cannot
    assert_eq!(table.get(0, "discharge_va"), Some(&Cell::Number(112.0)));
    assert_eq!(table.get(1, "discharge_va"), Some(&Cell::Null));

    // String and date hints stay text
    assert_eq!(
        table.get(0, "site_no"),
        Some(&Cell::Text("01646500".to_string()))
    );
    assert_eq!(
        table.get(0, "datetime"),
        Some(&Cell::Text("2023-04-01".to_string()))
    );
}

#[test]
fn test_plain_final_comment_is_preserved() {
    let table = parse_rdb(&sample_document_without_types()).unwrap();

    assert_eq!(table.comments.len(), 2);
    assert_eq!(
        table.comments.lines[1],
        "# retrieved 2023-04-03 from the server"
    );

    // Without hints every cell defaults to text, numeric-looking or not
    assert_eq!(
        table.get(0, "stage_va"),
        Some(&Cell::Text("3.25".to_string()))
    );
}

#[test]
fn test_empty_input_fails() {
    assert!(matches!(
        parse_rdb(""),
        Err(NwisError::NoHeaderLine { .. })
    ));
    assert!(matches!(
        parse_rdb("   \n  "),
        Err(NwisError::NoHeaderLine { .. })
    ));
}

#[test]
fn test_pure_comment_input_fails() {
    let raw = "# only annotations here\n# and nothing else";
    assert!(matches!(
        parse_rdb(raw),
        Err(NwisError::NoHeaderLine { .. })
    ));
}

#[test]
fn test_short_row_padded_with_nulls() {
    let raw = "a\tb\tc\n1\t2\t3\nx";
    let table = parse_rdb(raw).unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.get(1, "a"), Some(&Cell::Text("x".to_string())));
    assert_eq!(table.get(1, "b"), Some(&Cell::Null));
    assert_eq!(table.get(1, "c"), Some(&Cell::Null));
}

#[test]
fn test_long_row_truncated_to_header_width() {
    let raw = "a\tb\n1\t2\t3\t4";
    let table = parse_rdb(raw).unwrap();

    assert_eq!(table.row_count(), 1);
    let row = &table.rows[0];
    assert_eq!(row.len(), 2);
    assert_eq!(row.get("a"), Some(&Cell::Text("1".to_string())));
    assert_eq!(row.get("b"), Some(&Cell::Text("2".to_string())));
}

#[test]
fn test_duplicate_column_keeps_first_occurrence() {
    let raw = "a\tb\ta\n1\t2\t3";
    let table = parse_rdb(raw).unwrap();

    assert_eq!(table.columns, vec!["a", "b"]);
    assert_eq!(table.get(0, "a"), Some(&Cell::Text("1".to_string())));
    assert_eq!(table.get(0, "b"), Some(&Cell::Text("2".to_string())));
}

#[test]
fn test_empty_cells_are_null() {
    let raw = "a\tb\tc\n1\t\t3";
    let table = parse_rdb(raw).unwrap();

    assert_eq!(table.get(0, "b"), Some(&Cell::Null));
}

#[test]
fn test_rows_keep_document_order() {
    let raw = "site_no\tflow_va\n1\t10\n2\t20\n3\t30";
    let table = parse_rdb(raw).unwrap();

    let sites: Vec<&str> = (0..table.row_count())
        .map(|i| table.get(i, "site_no").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(sites, vec!["1", "2", "3"]);
}

#[test]
fn test_bytes_entry_point() {
    let table = parse_rdb_bytes(sample_document().as_bytes()).unwrap();
    assert_eq!(table.row_count(), 2);

    assert!(matches!(
        parse_rdb_bytes(&[0xff, 0xfe, 0x00]),
        Err(NwisError::Encoding { .. })
    ));
}
