//! Record parser tests: column mapping, validation, abort-on-first-failure.

mod common;

use prices_api::records::parse_records;
use prices_api::ServiceError;

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

#[test]
fn parses_rows_after_discarding_the_first() {
    let records = parse_records(common::SAMPLE_CSV.as_bytes()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Widget");
    assert_eq!(records[0].category, "Tools");
    assert_eq!(records[0].price, 9.99);
    assert_eq!(records[0].created_at, "2024-01-01");
    assert_eq!(records[1].name, "Gadget");
    assert_eq!(records[1].price, 19.5);
}

#[test]
fn first_row_is_discarded_even_when_it_looks_like_data() {
    let csv = "10,Widget,Tools,9.99,2024-01-01\n11,Gadget,Tools,19.5,2024-01-02\n";
    let records = parse_records(csv.as_bytes()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Gadget");
}

#[test]
fn identity_column_is_not_parsed() {
    let csv = "header\nnot-a-number,Widget,Tools,9.99,2024-01-01\n";
    let records = parse_records(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn extra_columns_are_tolerated() {
    let csv = "header\n1,Widget,Tools,9.99,2024-01-01,surplus\n";
    let records = parse_records(csv.as_bytes()).unwrap();
    assert_eq!(records[0].created_at, "2024-01-01");
}

#[test]
fn quoted_fields_keep_embedded_commas() {
    let csv = "header\n1,\"Widget, large\",Tools,9.99,2024-01-01\n";
    let records = parse_records(csv.as_bytes()).unwrap();
    assert_eq!(records[0].name, "Widget, large");
}

// ---------------------------------------------------------------------------
// Validation and abort behavior
// ---------------------------------------------------------------------------

#[test]
fn short_row_aborts_the_read() {
    let csv = "header\n1,Widget,Tools,9.99,2024-01-01\n2,Gadget,Tools\n";
    let err = parse_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ServiceError::RowShape { row: 2, columns: 3 }));
}

#[test]
fn non_numeric_price_aborts_the_read() {
    let csv = "header\n1,Widget,Tools,cheap,2024-01-01\n2,Gadget,Tools,19.5,2024-01-02\n";
    let err = parse_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ServiceError::FieldParse { row: 1, .. }));
}

#[test]
fn failure_reports_the_offending_value() {
    let csv = "header\n1,Widget,Tools,9,99,2024-01-01\n";
    // Comma-decimal prices split into an extra column; the price slot holds "9".
    let records = parse_records(csv.as_bytes()).unwrap();
    assert_eq!(records[0].price, 9.0);

    let csv = "header\n1,Widget,Tools,\"9,99\",2024-01-01\n";
    let err = parse_records(csv.as_bytes()).unwrap_err();
    match err {
        ServiceError::FieldParse { value, .. } => assert_eq!(value, "9,99"),
        other => panic!("expected FieldParse, got {other}"),
    }
}

#[test]
fn header_only_input_yields_no_records() {
    let records = parse_records(b"id,name,category,price,created_at\n".as_slice()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn empty_input_is_an_error() {
    let err = parse_records(b"".as_slice()).unwrap_err();
    assert!(matches!(err, ServiceError::RowShape { row: 0, .. }));
}
