use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::transaction::{Transaction, TransactionFilter};

/// Source of transactions (the persistence layer behind the statistics).
///
/// Implementations report failures as `CoreError::UpstreamUnavailable`;
/// the statistics pipeline propagates them unchanged and never retries.
/// Timeouts, if any, are the implementation's business.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TransactionStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// All transactions matching `filter`, in no particular order.
    async fn query(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, CoreError>;
}

/// Maps category ids to display titles.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CategoryRegistry: Send + Sync {
    fn name(&self) -> &str;

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError>;
}
