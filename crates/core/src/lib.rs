pub mod errors;
pub mod logging;
pub mod models;
pub mod services;
pub mod stores;

use std::sync::Arc;

use chrono::NaiveDate;
use models::{
    chart::{CategoryLineChart, ExpensesOverview},
    query::{CategoryLinesQuery, OverviewQuery},
    settings::StatsSettings,
};
use services::statistics_service::StatisticsService;
use stores::traits::{CategoryRegistry, TransactionStore};

use errors::CoreError;

/// Main entry point for the expense statistics core.
///
/// Holds the two collaborators (transaction store, category registry) and the
/// immutable settings. Every call recomputes from the store; nothing is cached,
/// so one instance can serve any number of concurrent requests.
#[must_use]
pub struct ExpenseStatistics {
    transactions: Arc<dyn TransactionStore>,
    categories: Arc<dyn CategoryRegistry>,
    statistics_service: StatisticsService,
}

impl std::fmt::Debug for ExpenseStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseStatistics")
            .field("transactions", &self.transactions.name())
            .field("categories", &self.categories.name())
            .field("settings", self.statistics_service.settings())
            .finish()
    }
}

impl ExpenseStatistics {
    /// Build with default settings.
    pub fn new(
        transactions: Arc<dyn TransactionStore>,
        categories: Arc<dyn CategoryRegistry>,
    ) -> Self {
        Self {
            transactions,
            categories,
            statistics_service: StatisticsService::default(),
        }
    }

    /// Build with custom settings. Fails if the settings don't validate.
    pub fn with_settings(
        transactions: Arc<dyn TransactionStore>,
        categories: Arc<dyn CategoryRegistry>,
        settings: StatsSettings,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self {
            transactions,
            categories,
            statistics_service: StatisticsService::new(settings),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &StatsSettings {
        self.statistics_service.settings()
    }

    // ── Category lines ──────────────────────────────────────────────

    /// Per-category monthly expense lines for a year, as of today (UTC).
    pub async fn get_category_monthly_lines(
        &self,
        query: &CategoryLinesQuery,
    ) -> Result<Vec<CategoryLineChart>, CoreError> {
        self.get_category_monthly_lines_on(chrono::Utc::now().date_naive(), query)
            .await
    }

    /// Same as `get_category_monthly_lines`, with an explicit "today".
    pub async fn get_category_monthly_lines_on(
        &self,
        today: NaiveDate,
        query: &CategoryLinesQuery,
    ) -> Result<Vec<CategoryLineChart>, CoreError> {
        self.statistics_service
            .get_category_monthly_lines(
                self.transactions.as_ref(),
                self.categories.as_ref(),
                query,
                today,
            )
            .await
    }

    // ── Overview ────────────────────────────────────────────────────

    /// Pie/bar/line dashboard for the current month (UTC).
    pub async fn get_expenses_overview(
        &self,
        query: &OverviewQuery,
    ) -> Result<ExpensesOverview, CoreError> {
        self.get_expenses_overview_on(chrono::Utc::now().date_naive(), query)
            .await
    }

    /// Same as `get_expenses_overview`, with an explicit "today".
    pub async fn get_expenses_overview_on(
        &self,
        today: NaiveDate,
        query: &OverviewQuery,
    ) -> Result<ExpensesOverview, CoreError> {
        self.statistics_service
            .get_expenses_overview(
                self.transactions.as_ref(),
                self.categories.as_ref(),
                query,
                today,
            )
            .await
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Serialize category line charts as JSON for the frontend.
    pub fn category_lines_to_json(charts: &[CategoryLineChart]) -> Result<String, CoreError> {
        serde_json::to_string(charts)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize charts: {e}")))
    }

    /// Serialize an overview as JSON for the frontend.
    pub fn overview_to_json(overview: &ExpensesOverview) -> Result<String, CoreError> {
        serde_json::to_string(overview)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize overview: {e}")))
    }
}
