//! Domain models for recorded money movements.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{EntityId, Identifiable};

/// A signed monetary movement, optionally tied to an account by name.
///
/// `amount` carries the sign (expenses negative, income positive); `kind` is
/// persisted alongside it under the `type` key, as older data expects both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: EntityId,
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub note: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl Transaction {
    /// Builds a transaction from an unsigned magnitude, normalizing the sign
    /// to match `kind`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EntityId,
        date: NaiveDate,
        category: impl Into<String>,
        note: impl Into<String>,
        kind: TransactionKind,
        magnitude: f64,
        account: Option<String>,
    ) -> Self {
        Self {
            id,
            date,
            category: category.into(),
            note: note.into(),
            amount: kind.signed(magnitude),
            kind,
            account,
        }
    }

    /// Absolute value of the amount, regardless of direction.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Whether this transaction is posted against the named account.
    pub fn posted_to(&self, account_name: &str) -> bool {
        self.account.as_deref() == Some(account_name)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Direction of a transaction. Redundant with the amount sign, but persisted
/// because the stored layout carries both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Applies this direction's sign to an unsigned magnitude.
    pub fn signed(self, magnitude: f64) -> f64 {
        match self {
            TransactionKind::Income => magnitude.abs(),
            TransactionKind::Expense => -magnitude.abs(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}
