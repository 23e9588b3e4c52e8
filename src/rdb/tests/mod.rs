//! Test fixtures and helpers for the RDB importer
//!
//! Fixture documents mirror the shape served by the daily-values and
//! site-information endpoints: a comment block, a type-declaration line,
//! a tab-delimited header, and tab-delimited rows.

mod parser_tests;

/// A small daily-values style document with a type-declaration line
pub(crate) fn sample_document() -> String {
    [
        "# Data provided for site 01646500",
        "# ---------------------------------",
        "# contact: operations desk",
        "#5s\t15s\t20d\t14n\t10s",
        "agency_cd\tsite_no\tdatetime\tdischarge_va\tremark_cd",
        "USGS\t01646500\t2023-04-01\t112.0\tA",
        "USGS\t01646500\t2023-04-02\tice\tA",
    ]
    .join("\n")
}

/// A document whose comment block ends in prose rather than type codes
pub(crate) fn sample_document_without_types() -> String {
    [
        "# Data provided for site 01646500",
        "# retrieved 2023-04-03 from the server",
        "site_no\tstage_va",
        "01646500\t3.25",
    ]
    .join("\n")
}
