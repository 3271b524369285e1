use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money spent
    Expense,
    /// Money received
    Revenue,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Expense => write!(f, "expense"),
            TransactionType::Revenue => write!(f, "revenue"),
        }
    }
}

/// A single financial transaction as served by the transaction store.
///
/// Read-only to this crate. Only `Expense` rows take part in the statistics;
/// a missing `category_id` is the "uncategorized" bucket and is never dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Owner of the transaction
    pub user_id: String,

    /// Category this transaction is filed under, if any
    #[serde(default)]
    pub category_id: Option<String>,

    /// Expense or revenue
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Non-negative amount (accepted as a JSON number or string)
    pub amount: Decimal,

    /// Booking date (daily granularity)
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        user_id: impl Into<String>,
        category_id: Option<String>,
        kind: TransactionType,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            category_id,
            kind,
            amount,
            date,
        }
    }

    /// Shorthand for an expense row.
    pub fn expense(
        user_id: impl Into<String>,
        category_id: Option<&str>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self::new(
            user_id,
            category_id.map(str::to_string),
            TransactionType::Expense,
            amount,
            date,
        )
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// Range query presented to the transaction store.
///
/// Bounds are inclusive. `user_id = None` means "all users".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    pub user_id: Option<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub kind: Option<TransactionType>,
}

impl TransactionFilter {
    /// Whether `tx` satisfies every constraint of this filter.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(user_id) = &self.user_id {
            if &tx.user_id != user_id {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        tx.date >= self.from && tx.date <= self.to
    }
}
