// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::App;
use crate::models::{Transaction, TransactionDraft, TxKind};
use crate::repository::transactions::{sort_recent, KindFilter};
use crate::repository::TransactionRepository;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub async fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub).await?,
        Some(("list", sub)) => list(app, sub).await?,
        _ => {}
    }
    Ok(())
}

pub fn draft_from_matches(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };
    let mut draft = TransactionDraft::new(kind, date);
    draft.title = sub.get_one::<String>("title").cloned().unwrap_or_default();
    draft.amount = sub.get_one::<String>("amount").cloned().unwrap_or_default();
    if let Some(cat) = sub.get_one::<String>("category") {
        draft.select_category(cat);
    }
    draft.note = sub.get_one::<String>("note").cloned().unwrap_or_default();
    Ok(draft)
}

async fn add(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let new_tx = draft_from_matches(sub)?.validate()?;
    let created = TransactionRepository::new(&app.api).create(&new_tx).await?;
    println!(
        "Recorded {} '{}' of {} on {} ({})",
        created.kind,
        created.title,
        fmt_money(&created.amount),
        created.date,
        created.category
    );
    Ok(())
}

async fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = TransactionRepository::new(&app.api).list().await?;
    let data = select_rows(txs, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.title.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Title", "Type", "Category", "Amount", "Note"], rows)
        );
        println!("{} transaction(s)", data.len());
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub title: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        let sign = match tx.kind {
            TxKind::Income => "+",
            TxKind::Expense => "-",
        };
        TransactionRow {
            date: tx.date.to_string(),
            title: tx.title.clone(),
            kind: tx.kind.to_string(),
            category: tx.category.clone(),
            amount: format!("{}{}", sign, fmt_money(&tx.amount)),
            note: tx.note.clone().unwrap_or_default(),
        }
    }
}

/// Apply the `--kind` and `--limit` options to a fetched history.
pub fn select_rows(
    mut txs: Vec<Transaction>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter = match sub.get_one::<String>("kind") {
        Some(k) => KindFilter::parse(k)?,
        None => KindFilter::All,
    };
    sort_recent(&mut txs);
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    Ok(txs
        .iter()
        .filter(|tx| filter.matches(tx))
        .take(limit)
        .map(TransactionRow::from)
        .collect())
}
