// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::resolve_category;
use crate::error::{ApiError, ValidationError};
use crate::utils::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// Lenient reading of the backend `type` field. Anything that is not a
    /// known income spelling counts as an expense.
    pub fn from_api(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "income" | "pemasukan" | "kredit" | "credit" => TxKind::Income,
            _ => TxKind::Expense,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid transaction type '{}', expected income or expense",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub title: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// Transaction as returned by the backend. Every field is optional on the
/// wire; missing and `null` fields take the defaults below.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionDto {
    #[serde(default, deserialize_with = "id_text_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: Decimal,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Backends with integer primary keys send `"id": 42`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn id_text_or_number<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(d)?.map(|id| match id {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    }))
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

impl TryFrom<TransactionDto> for Transaction {
    type Error = ApiError;

    fn try_from(dto: TransactionDto) -> Result<Self, Self::Error> {
        // Some backends send full timestamps; the calendar date is the prefix.
        let day = dto.date.get(..10).unwrap_or(&dto.date);
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| {
            ApiError::Transport(format!(
                "Malformed response: invalid transaction date '{}'",
                dto.date
            ))
        })?;
        Ok(Transaction {
            id: dto.id,
            title: dto.title,
            amount: dto.amount,
            kind: TxKind::from_api(&dto.kind),
            category: dto.category,
            date,
            note: dto.note,
        })
    }
}

/// Body of `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
}

/// Add-transaction form state before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: String,
    kind: TxKind,
    category: Option<String>,
    pub date: NaiveDate,
    pub note: String,
}

impl TransactionDraft {
    pub fn new(kind: TxKind, date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            kind,
            category: None,
            date,
            note: String::new(),
        }
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Change the transaction kind. A category picked for the old kind is
    /// dropped so it cannot leak into the other kind's list.
    pub fn set_kind(&mut self, kind: TxKind) {
        if self.kind != kind {
            self.kind = kind;
            self.category = None;
        }
    }

    pub fn select_category(&mut self, label: &str) {
        let label = label.trim();
        self.category = if label.is_empty() {
            None
        } else {
            Some(label.to_string())
        };
    }

    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;
        let label = self
            .category
            .as_deref()
            .ok_or(ValidationError::MissingCategory)?;
        let note = self.note.trim();

        Ok(NewTransaction {
            title: title.to_string(),
            amount,
            kind: self.kind,
            category: resolve_category(label, self.kind),
            date: self.date,
            note: note.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

/// Summary payload; the backend has shipped both field spellings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDto {
    #[serde(default)]
    pub total_income: Option<Decimal>,
    #[serde(default)]
    pub total_expense: Option<Decimal>,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub income: Option<Decimal>,
    #[serde(default)]
    pub expense: Option<Decimal>,
}

impl TryFrom<SummaryDto> for MonthlySummary {
    type Error = ApiError;

    fn try_from(dto: SummaryDto) -> Result<Self, Self::Error> {
        let total_income = dto.total_income.or(dto.income).unwrap_or(Decimal::ZERO);
        let total_expense = dto.total_expense.or(dto.expense).unwrap_or(Decimal::ZERO);
        let balance = match dto.balance {
            Some(b) => b,
            None => total_income
                .checked_sub(total_expense)
                .ok_or_else(|| overflow("monthly balance"))?,
        };
        Ok(MonthlySummary {
            total_income,
            total_expense,
            balance,
        })
    }
}

fn overflow(what: &str) -> ApiError {
    ApiError::Transport(format!("Malformed response: {} out of range", what))
}

/// Client-side totals over a list of transactions (home and history views).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl Totals {
    /// Fails when the sums leave `Decimal` range.
    pub fn from_transactions<'a, I>(txs: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut t = Totals::default();
        for tx in txs {
            let sum = match tx.kind {
                TxKind::Income => &mut t.income,
                TxKind::Expense => &mut t.expense,
            };
            *sum = sum
                .checked_add(tx.amount)
                .ok_or_else(|| overflow("transaction total"))?;
        }
        t.net = t
            .income
            .checked_sub(t.expense)
            .ok_or_else(|| overflow("transaction total"))?;
        Ok(t)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
