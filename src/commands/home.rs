// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::TransactionRow;
use crate::commands::App;
use crate::models::Totals;
use crate::repository::transactions::sort_recent;
use crate::repository::TransactionRepository;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;

pub async fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    let recent = *m.get_one::<usize>("recent").unwrap_or(&5);
    let mut txs = TransactionRepository::new(&app.api).list().await?;
    let totals = Totals::from_transactions(&txs)?;
    sort_recent(&mut txs);

    println!("Balance: {}", fmt_money(&totals.net));
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense"],
            vec![vec![fmt_money(&totals.income), fmt_money(&totals.expense)]],
        )
    );

    if txs.is_empty() {
        println!("No transactions yet. Add one with `financefreedom tx add`.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = txs
        .iter()
        .take(recent)
        .map(TransactionRow::from)
        .map(|r| vec![r.date, r.title, r.category, r.amount])
        .collect();
    println!("Recent transactions");
    println!(
        "{}",
        pretty_table(&["Date", "Title", "Category", "Amount"], rows)
    );
    Ok(())
}
