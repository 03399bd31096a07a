//! # Trace Loader Tests
//!
//! Tests for the multi-test-case trace format: header parsing, hex address
//! decoding, token streams spanning lines, and error reporting with line
//! context.

use tlbsim_core::common::{SimError, Vpn};
use tlbsim_core::sim::{TestCase, parse_refs, parse_trace};

/// Parses or fails the test with the loader's own error message.
fn parsed(input: &str) -> Vec<TestCase> {
    match parse_trace(input) {
        Ok(cases) => cases,
        Err(err) => panic!("parse failed: {err}"),
    }
}

#[test]
fn single_case_with_header() {
    let cases = parsed("1\n32 4 2 5\n0x1000 0x2000 0x3000 0x2000 0x1000\n");
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].config.capacity, 2);
    assert_eq!(cases[0].config.page_size_kib, 4);
    assert_eq!(cases[0].refs.len(), 5);
    // 4 KiB pages shift by 12: 0x1000 → page 1, 0x2000 → page 2, ...
    assert_eq!(cases[0].vpns(), vec![Vpn(1), Vpn(2), Vpn(3), Vpn(2), Vpn(1)]);
}

/// Tokens may span lines freely, exactly like the classic driver's input.
#[test]
fn tokens_span_lines() {
    let cases = parsed("2 32 4\n1 2 0xA0000\nDEAD0\n32 16 3 1 BEEF0000");
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].config.capacity, 1);
    assert_eq!(cases[0].refs.len(), 2);
    assert_eq!(cases[1].config.page_size_kib, 16);
    // 16 KiB pages shift by 14.
    assert_eq!(cases[1].vpns(), vec![Vpn(0xBEEF_0000 >> 14)]);
}

/// Addresses parse as hex with or without a 0x prefix.
#[test]
fn hex_prefix_optional() {
    let cases = parsed("1 32 4 4 2 ABC 0xABC");
    assert_eq!(cases[0].refs[0].val(), 0xABC);
    assert_eq!(cases[0].refs[1].val(), 0xABC);
}

/// Input past the final test case is ignored, as in the classic driver.
#[test]
fn trailing_tokens_ignored() {
    let cases = parsed("1 32 4 2 1 FFFF\nextra tokens here");
    assert_eq!(cases.len(), 1);
}

#[test]
fn truncated_input_reports_line() {
    let result = parse_trace("1\n32 4 2 5\n0x1000 0x2000\n");
    assert!(
        matches!(result, Err(SimError::Parse { line: 3, .. })),
        "end-of-input should be reported on the last token's line"
    );
}

#[test]
fn non_numeric_header_reports_line() {
    let result = parse_trace("1\n32 four 2 5\n");
    assert!(matches!(result, Err(SimError::Parse { line: 2, .. })));
}

#[test]
fn bad_hex_address_reports_line() {
    let result = parse_trace("1 32 4 2 2\n0x1000 0xNOPE");
    assert!(matches!(result, Err(SimError::Parse { line: 2, .. })));
}

/// A header with a zero capacity is a configuration error, caught before
/// any replay could run with undefined eviction behavior.
#[test]
fn zero_capacity_header_rejected() {
    let result = parse_trace("1\n32 4 0 1\n0x1000\n");
    assert!(matches!(
        result,
        Err(SimError::InvalidCapacity { got: 0 })
    ));
}

#[test]
fn bad_page_size_header_rejected() {
    let result = parse_trace("1\n32 5 2 1\n0x1000\n");
    assert!(matches!(result, Err(SimError::InvalidPageSize { got: 5 })));
}

#[test]
fn bare_address_list() {
    let refs = match parse_refs("1000 2000\n3000") {
        Ok(refs) => refs,
        Err(err) => panic!("parse failed: {err}"),
    };
    assert_eq!(refs.len(), 3);
    assert_eq!(refs[2].val(), 0x3000);
}

#[test]
fn bare_list_rejects_garbage() {
    let result = parse_refs("1000 pagefault");
    assert!(matches!(result, Err(SimError::Parse { line: 1, .. })));
}

#[test]
fn empty_input_yields_no_refs() {
    let refs = match parse_refs("") {
        Ok(refs) => refs,
        Err(err) => panic!("parse failed: {err}"),
    };
    assert!(refs.is_empty());
}
