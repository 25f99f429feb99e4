// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::App;
use crate::models::MonthlySummary;
use crate::repository::TransactionRepository;
use crate::utils::{current_month, fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub async fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    let month = match m.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => current_month(),
    };
    let summary = TransactionRepository::new(&app.api)
        .monthly_summary(&month)
        .await?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        println!("Report for {}", month);
        println!("{}", summary_table(&summary));
        println!("{}", verdict(&summary));
    }
    Ok(())
}

pub fn summary_table(s: &MonthlySummary) -> comfy_table::Table {
    let rows = vec![
        vec!["Income".to_string(), fmt_money(&s.total_income)],
        vec!["Expense".to_string(), fmt_money(&s.total_expense)],
        vec!["Balance".to_string(), fmt_money(&s.balance)],
        vec!["Spent of income".to_string(), spent_ratio(s)],
    ];
    pretty_table(&["", "Amount"], rows)
}

/// Expense as a share of income, "-" when there was no income or the
/// ratio does not fit a `Decimal`.
pub fn spent_ratio(s: &MonthlySummary) -> String {
    if s.total_income.is_zero() {
        return "-".to_string();
    }
    s.total_expense
        .checked_div(s.total_income)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| format!("{}%", pct.round_dp(1).normalize()))
        .unwrap_or_else(|| "-".to_string())
}

pub fn verdict(s: &MonthlySummary) -> String {
    if s.balance >= Decimal::ZERO {
        format!("Surplus this month: +{}", fmt_money(&s.balance))
    } else {
        format!("Deficit this month: {}", fmt_money(&s.balance))
    }
}
