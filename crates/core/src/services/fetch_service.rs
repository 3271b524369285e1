use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::transaction::{Transaction, TransactionFilter, TransactionType};
use crate::stores::traits::TransactionStore;

/// Retrieves expense transactions for a user and date range.
///
/// Thin layer over the `TransactionStore`: builds the range query and passes
/// errors through as-is. Rows that cannot take part in expense totals
/// (non-expense rows, negative amounts) are dropped. No aggregation happens here.
pub struct TransactionFetcher;

impl TransactionFetcher {
    pub fn new() -> Self {
        Self
    }

    /// Expenses dated within `[from, to]` (inclusive). `user_id = None` means all users.
    /// Result order is whatever the store returns.
    pub async fn fetch_expenses(
        &self,
        store: &dyn TransactionStore,
        user_id: Option<&str>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Transaction>, CoreError> {
        if from > to {
            return Err(CoreError::InvalidParameter(format!(
                "'from' date ({from}) must not be after 'to' date ({to})"
            )));
        }

        let filter = TransactionFilter {
            user_id: user_id.map(str::to_string),
            from,
            to,
            kind: Some(TransactionType::Expense),
        };

        let mut transactions = store.query(&filter).await?;
        let fetched = transactions.len();
        transactions.retain(|t| t.is_expense());

        let before = transactions.len();
        transactions.retain(|t| t.amount >= Decimal::ZERO);
        let negative = before - transactions.len();
        if negative > 0 {
            tracing::warn!(
                store = store.name(),
                negative,
                "Dropped expense rows with a negative amount"
            );
        }

        tracing::debug!(
            store = store.name(),
            user_id = user_id.unwrap_or("*"),
            %from,
            %to,
            fetched,
            expenses = transactions.len(),
            "Fetched expense transactions"
        );

        Ok(transactions)
    }
}

impl Default for TransactionFetcher {
    fn default() -> Self {
        Self::new()
    }
}
