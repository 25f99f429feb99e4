// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{
    MonthlySummary, NewTransaction, SummaryDto, Transaction, TransactionDto, TxKind,
};

pub struct TransactionRepository<'a> {
    api: &'a ApiClient,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        let req = self.api.authed(Method::GET, "transactions")?;
        let rows: Vec<TransactionDto> = self.api.send(req).await?;
        rows.into_iter().map(Transaction::try_from).collect()
    }

    pub async fn create(&self, tx: &NewTransaction) -> Result<Transaction, ApiError> {
        let req = self.api.authed(Method::POST, "transactions")?.json(tx);
        let dto: TransactionDto = self.api.send(req).await?;
        Transaction::try_from(dto)
    }

    /// `month` is `YYYY-MM`.
    pub async fn monthly_summary(&self, month: &str) -> Result<MonthlySummary, ApiError> {
        let req = self
            .api
            .authed(Method::GET, "transactions/summary")?
            .query(&[("month", month)]);
        let dto: SummaryDto = self.api.send(req).await?;
        MonthlySummary::try_from(dto)
    }
}

/// History filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(TxKind),
}

impl KindFilter {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(KindFilter::All)
        } else {
            Ok(KindFilter::Only(s.parse()?))
        }
    }

    pub fn matches(self, tx: &Transaction) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(kind) => tx.kind == kind,
        }
    }
}

/// Newest first, ties broken by the server's order.
pub fn sort_recent(txs: &mut [Transaction]) {
    txs.sort_by(|a, b| b.date.cmp(&a.date));
}
