// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use financefreedom::utils::{fmt_money, parse_amount};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn parses_plain_and_grouped_amounts() {
    assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
    assert_eq!(parse_amount("25000"), Some(dec("25000")));
    assert_eq!(parse_amount("1.5"), Some(dec("1.5")));
    assert_eq!(parse_amount("12.34"), Some(dec("12.34")));
    assert_eq!(parse_amount("500.000"), Some(dec("500000")));
    assert_eq!(parse_amount("10.000.000"), Some(dec("10000000")));
    assert_eq!(parse_amount("  7.25 "), Some(dec("7.25")));
}

#[test]
fn rejects_blank_and_foreign_characters() {
    for bad in ["", "   ", "abc", "1,5", "-5", "1e3", "Rp 500", "."] {
        assert_eq!(parse_amount(bad), None, "input {:?}", bad);
    }
}

#[test]
fn multiple_separators_are_all_thousands_markers() {
    // Group sizes are not checked once there is more than one separator.
    assert_eq!(parse_amount("1.2.3"), Some(dec("123")));
    assert_eq!(parse_amount("1.000.5"), Some(dec("10005")));
}

#[test]
fn lone_separator_edges() {
    assert_eq!(parse_amount(".5"), Some(dec("0.5")));
    assert_eq!(parse_amount("5."), Some(dec("5")));
    assert_eq!(parse_amount(".500"), Some(dec("500")));
    assert_eq!(parse_amount("1.2345"), Some(dec("1.2345")));
}

#[test]
fn overflow_is_invalid() {
    assert_eq!(parse_amount("99999999999999999999999999999999999"), None);
}

#[test]
fn reparsing_own_output_is_stable() {
    for s in ["0", "1.5", "12.34", "500.000", "10.000.000", "5.", ".25", "3.1415"] {
        let first = parse_amount(s).unwrap();
        let again = parse_amount(&first.to_string()).unwrap();
        assert_eq!(first, again, "input {:?}", s);
    }
}

#[test]
fn money_uses_dot_grouping() {
    assert_eq!(fmt_money(&dec("0")), "Rp 0");
    assert_eq!(fmt_money(&dec("999")), "Rp 999");
    assert_eq!(fmt_money(&dec("1500000")), "Rp 1.500.000");
    assert_eq!(fmt_money(&dec("1234.5")), "Rp 1.234,5");
    assert_eq!(fmt_money(&dec("-25000")), "-Rp 25.000");
}
