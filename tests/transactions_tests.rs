// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use financefreedom::models::{Totals, Transaction, TxKind};
use financefreedom::{cli, commands::transactions};
use rust_decimal::Decimal;

fn tx(day: u32, kind: TxKind, amount: i64) -> Transaction {
    Transaction {
        id: None,
        title: format!("T{}", day),
        amount: Decimal::from(amount),
        kind,
        category: "Other".into(),
        date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        note: None,
    }
}

fn history() -> Vec<Transaction> {
    vec![
        tx(1, TxKind::Income, 5_000_000),
        tx(3, TxKind::Expense, 250_000),
        tx(2, TxKind::Expense, 3_500),
    ]
}

#[test]
fn list_limit_and_kind_respected() {
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["financefreedom", "tx", "list", "--kind", "expense", "--limit", "1"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::select_rows(history(), list_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].date, "2025-01-03");
            assert_eq!(rows[0].amount, "-Rp 250.000");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_defaults_to_all_newest_first() {
    let matches = cli::build_cli().get_matches_from(["financefreedom", "tx", "list"]);
    let list_m = matches
        .subcommand_matches("tx")
        .and_then(|m| m.subcommand_matches("list"))
        .unwrap();
    let rows = transactions::select_rows(history(), list_m).unwrap();
    let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2025-01-03", "2025-01-02", "2025-01-01"]);
    assert_eq!(rows[2].amount, "+Rp 5.000.000");
}

#[test]
fn add_arguments_build_a_valid_draft() {
    let matches = cli::build_cli().get_matches_from([
        "financefreedom",
        "tx",
        "add",
        "--title",
        "Bonus Q1",
        "--amount",
        "2.500.000",
        "--type",
        "income",
        "--category",
        "Bonus",
        "--date",
        "2025-04-01",
    ]);
    let add_m = matches
        .subcommand_matches("tx")
        .and_then(|m| m.subcommand_matches("add"))
        .unwrap();
    let draft = transactions::draft_from_matches(add_m).unwrap();
    assert_eq!(draft.kind(), TxKind::Income);
    assert_eq!(draft.category(), Some("Bonus"));

    let new_tx = draft.validate().unwrap();
    assert_eq!(new_tx.amount, Decimal::from(2_500_000));
    assert_eq!(new_tx.category, "Other");
    assert_eq!(new_tx.date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
}

#[test]
fn add_rejects_bad_date() {
    let matches = cli::build_cli().get_matches_from([
        "financefreedom", "tx", "add", "--title", "x", "--amount", "1", "--type", "expense",
        "--category", "Food", "--date", "01/04/2025",
    ]);
    let add_m = matches
        .subcommand_matches("tx")
        .and_then(|m| m.subcommand_matches("add"))
        .unwrap();
    let err = transactions::draft_from_matches(add_m).unwrap_err();
    assert!(err.to_string().contains("Invalid date"));
}

#[test]
fn rejects_unknown_type() {
    let res = cli::build_cli().try_get_matches_from([
        "financefreedom", "categories", "--type", "transfer",
    ]);
    assert!(res.is_err());
}

#[test]
fn totals_over_history() {
    let t = Totals::from_transactions(&history()).unwrap();
    assert_eq!(t.income, Decimal::from(5_000_000));
    assert_eq!(t.expense, Decimal::from(253_500));
    assert_eq!(t.net, Decimal::from(4_746_500));
}

#[test]
fn totals_out_of_range_are_an_error() {
    let mut huge = tx(1, TxKind::Income, 0);
    huge.amount = Decimal::MAX;
    let err = Totals::from_transactions(&[huge.clone(), huge.clone()]).unwrap_err();
    assert!(err.to_string().contains("out of range"));

    // income MAX minus expense MAX stays in range
    let mut spent = huge;
    spent.kind = TxKind::Expense;
    let mut earned = spent.clone();
    earned.kind = TxKind::Income;
    let t = Totals::from_transactions(&[earned, spent]).unwrap();
    assert_eq!(t.net, Decimal::ZERO);
}
