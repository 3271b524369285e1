use chrono::{Datelike, NaiveDate};

use crate::errors::CoreError;
use crate::models::category::CategoryTitles;
use crate::models::chart::{CategoryLineChart, ExpensesOverview, OverviewMeta};
use crate::models::month::MonthBucket;
use crate::models::query::{CategoryLinesQuery, OverviewQuery, TOTAL_LINE_MONTHS};
use crate::models::settings::StatsSettings;
use crate::services::chart_service::ChartComposer;
use crate::services::fetch_service::TransactionFetcher;
use crate::services::grouping_service::{within_window, GroupingService};
use crate::services::month_service::{
    build_months, build_year_months, fetch_range, resolve_last_month_index, validate_count,
    MonthLabeler,
};
use crate::services::ranking_service::RankingService;
use crate::stores::traits::{CategoryRegistry, TransactionStore};

/// The two statistics pipelines: `fetch → group → rank → compose`.
///
/// Stateless between calls: every request recomputes from the store snapshot.
/// `today` is passed in explicitly so results only depend on the inputs.
pub struct StatisticsService {
    settings: StatsSettings,
    fetcher: TransactionFetcher,
    grouping: GroupingService,
    ranking: RankingService,
    composer: ChartComposer,
}

impl StatisticsService {
    pub fn new(settings: StatsSettings) -> Self {
        Self {
            fetcher: TransactionFetcher::new(),
            grouping: GroupingService::new(),
            ranking: RankingService::from_settings(&settings),
            composer: ChartComposer::from_settings(&settings),
            settings,
        }
    }

    pub fn settings(&self) -> &StatsSettings {
        &self.settings
    }

    /// Per-category expense lines for one year, largest total first.
    ///
    /// Window: January through December of `year` (default: the current year),
    /// or through the current month when `limit_to_elapsed_months` is set and
    /// `year` is the current year.
    #[tracing::instrument(skip(self, store, registry), fields(store = store.name()))]
    pub async fn get_category_monthly_lines(
        &self,
        store: &dyn TransactionStore,
        registry: &dyn CategoryRegistry,
        query: &CategoryLinesQuery,
        today: NaiveDate,
    ) -> Result<Vec<CategoryLineChart>, CoreError> {
        if query.top_n == Some(0) {
            return Err(CoreError::InvalidParameter(
                "topN must be greater than zero".into(),
            ));
        }

        let year = query.year.unwrap_or_else(|| today.year());
        let last_month_index =
            resolve_last_month_index(year, query.limit_to_elapsed_months, today);
        let months = build_year_months(year, last_month_index)?;
        let (from, to) = window_range(&months)?;

        let labeler = MonthLabeler::new(query.locale.as_deref(), &self.settings.default_locale);
        let labels = labeler.labels(&months);

        let transactions = self
            .fetcher
            .fetch_expenses(store, query.user_id.as_deref(), from, to)
            .await?;
        let titles = self.load_titles(registry).await?;

        let grouped = self.grouping.group(&transactions, &months, &titles)?;
        let ranked = self.ranking.rank(grouped.into_series())?;

        Ok(self
            .composer
            .to_category_lines(&ranked, &labels, query.top_n))
    }

    /// The monthly dashboard.
    ///
    /// - `pie`: current month, one slice per category active in the last 12 months
    /// - `bar`: top-K categories by total over the last `months_for_bar` months
    /// - `line`: total over all categories for each of the last 12 months
    ///
    /// Each chart only groups the rows of its own window, so the pie and line
    /// never depend on `months_for_bar`.
    #[tracing::instrument(skip(self, store, registry), fields(store = store.name()))]
    pub async fn get_expenses_overview(
        &self,
        store: &dyn TransactionStore,
        registry: &dyn CategoryRegistry,
        query: &OverviewQuery,
        today: NaiveDate,
    ) -> Result<ExpensesOverview, CoreError> {
        let max = self.settings.max_window_months;
        validate_count("monthsForBar", query.months_for_bar, max)?;
        if query.top_k == 0 {
            return Err(CoreError::InvalidParameter(
                "topK must be greater than zero".into(),
            ));
        }

        let current = MonthBucket::from_date(today);
        let pie_months = vec![current];
        let bar_months = build_months(today, query.months_for_bar);
        let line_months = build_months(today, TOTAL_LINE_MONTHS);

        // One fetch covering the widest window; each chart regroups its own slice of it.
        let widest = if bar_months.len() > line_months.len() {
            &bar_months
        } else {
            &line_months
        };
        let (from, to) = window_range(widest)?;

        let labeler = MonthLabeler::new(query.locale.as_deref(), &self.settings.default_locale);

        let transactions = self
            .fetcher
            .fetch_expenses(store, query.user_id.as_deref(), from, to)
            .await?;
        let titles = self.load_titles(registry).await?;

        let line_rows = within_window(&transactions, &line_months);
        let bar_rows = within_window(&transactions, &bar_months);

        // Pie slices: every category of the 12-month window, valued at the current month.
        let pie_grouped = self.grouping.group(&line_rows, &pie_months, &titles)?;
        let pie_ranked = self.ranking.rank(pie_grouped.into_series())?;
        let pie = self
            .composer
            .to_pie_breakdown(&pie_ranked, &pie_months, current);

        let bar_grouped = self.grouping.group(&bar_rows, &bar_months, &titles)?;
        let bar_ranked = self.ranking.rank(bar_grouped.into_series())?;
        let bar_top = self.ranking.top_k(bar_ranked, query.top_k);
        let bar = self
            .composer
            .to_bar_comparison(&bar_top, &labeler.labels(&bar_months));

        let line_grouped = self.grouping.group(&line_rows, &line_months, &titles)?;
        let line = self
            .composer
            .to_total_line(&line_grouped, &labeler.labels(&line_months))?;

        Ok(ExpensesOverview {
            pie,
            bar,
            line,
            meta: OverviewMeta {
                month_index: current.month_index,
                year: current.year,
                months_bar: query.months_for_bar,
                top_k: query.top_k,
            },
        })
    }

    async fn load_titles(&self, registry: &dyn CategoryRegistry) -> Result<CategoryTitles, CoreError> {
        let categories = registry.list_categories().await?;
        tracing::debug!(
            registry = registry.name(),
            categories = categories.len(),
            "Loaded category titles"
        );
        Ok(CategoryTitles::new(
            &categories,
            self.settings.uncategorized_title.clone(),
        ))
    }
}

impl Default for StatisticsService {
    fn default() -> Self {
        Self::new(StatsSettings::default())
    }
}

fn window_range(months: &[MonthBucket]) -> Result<(NaiveDate, NaiveDate), CoreError> {
    fetch_range(months).ok_or_else(|| {
        CoreError::InvalidParameter("month window is empty or outside the supported calendar".into())
    })
}
