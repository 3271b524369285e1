use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::transaction::{Transaction, TransactionFilter};

use super::traits::{CategoryRegistry, TransactionStore};

/// In-process store holding transactions and categories in plain vectors.
///
/// Serves both collaborator roles. Useful for embedding the engine in a
/// process that already has the data loaded, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(transactions: Vec<Transaction>, categories: Vec<Category>) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TransactionStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn query(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, CoreError> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CategoryRegistry for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        Ok(self.categories.clone())
    }
}
