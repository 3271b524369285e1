use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::transaction::{Transaction, TransactionFilter};

use super::traits::{CategoryRegistry, TransactionStore};

const STORE_NAME: &str = "rest";

/// REST backend serving both transactions and categories.
///
/// - **Transactions**: `GET {base}/transactions?from=YYYY-MM-DD&to=YYYY-MM-DD[&type=expense][&userId=..]`
///   returning a JSON array of transactions.
/// - **Categories**: `GET {base}/categories` returning a JSON array of `{ id, title }`.
///
/// Every failure (connection, timeout, non-2xx status, undecodable body) is
/// reported as `UpstreamUnavailable`.
pub struct RestStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transactions_url(&self) -> String {
        format!("{}/transactions", self.base_url)
    }

    pub fn categories_url(&self) -> String {
        format!("{}/categories", self.base_url)
    }

    /// Query-string pairs for a transaction range query.
    pub fn query_params(filter: &TransactionFilter) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("from", filter.from.format("%Y-%m-%d").to_string()),
            ("to", filter.to.format("%Y-%m-%d").to_string()),
        ];
        if let Some(kind) = filter.kind {
            params.push(("type", kind.to_string()));
        }
        if let Some(user_id) = &filter.user_id {
            params.push(("userId", user_id.clone()));
        }
        params
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TransactionStore for RestStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    async fn query(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, CoreError> {
        let request = self
            .client
            .get(self.transactions_url())
            .query(&Self::query_params(filter));

        let transactions: Vec<Transaction> = self
            .authorized(request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| CoreError::http(STORE_NAME, e))?
            .json()
            .await
            .map_err(|e| {
                CoreError::upstream(STORE_NAME, format!("Failed to parse transactions: {e}"))
            })?;

        Ok(transactions)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CategoryRegistry for RestStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        let request = self.client.get(self.categories_url());

        let categories: Vec<Category> = self
            .authorized(request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| CoreError::http(STORE_NAME, e))?
            .json()
            .await
            .map_err(|e| {
                CoreError::upstream(STORE_NAME, format!("Failed to parse categories: {e}"))
            })?;

        Ok(categories)
    }
}
