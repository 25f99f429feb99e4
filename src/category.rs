// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxKind;

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Entertainment",
    "Health",
    "Bills",
    "Education",
    "Other",
];

pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", "Investment", "Other"];

/// The only income category value the backend currently accepts.
pub const INCOME_SENTINEL: &str = "Other";

impl TxKind {
    /// Categories offered to the user for this kind of transaction.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            TxKind::Income => INCOME_CATEGORIES,
            TxKind::Expense => EXPENSE_CATEGORIES,
        }
    }
}

/// Map a display label to the value sent to the backend.
///
/// Expense labels pass through unchanged. Every income label collapses to
/// [`INCOME_SENTINEL`] because the backend rejects anything else for income;
/// drop the coercion once the backend validates income categories properly.
pub fn resolve_category(label: &str, kind: TxKind) -> String {
    match kind {
        TxKind::Income => INCOME_SENTINEL.to_string(),
        TxKind::Expense => label.to_string(),
    }
}
