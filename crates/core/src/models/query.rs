use serde::{Deserialize, Serialize};

/// Default number of months compared in the overview bar chart.
pub const DEFAULT_MONTHS_FOR_BAR: usize = 6;

/// Default number of categories kept in the overview bar chart.
pub const DEFAULT_TOP_K: usize = 5;

/// Number of trailing months in the overview total line.
pub const TOTAL_LINE_MONTHS: usize = 12;

/// Parameters of the yearly per-category line charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryLinesQuery {
    /// Defaults to the current year
    pub year: Option<i32>,

    /// For the current year, stop at the current month instead of December
    pub limit_to_elapsed_months: bool,

    /// Keep only the N highest-total categories
    pub top_n: Option<usize>,

    /// Locale for month labels; defaults to the configured locale
    pub locale: Option<String>,

    /// `None` aggregates over all users
    pub user_id: Option<String>,
}

impl Default for CategoryLinesQuery {
    fn default() -> Self {
        Self {
            year: None,
            limit_to_elapsed_months: true,
            top_n: None,
            locale: None,
            user_id: None,
        }
    }
}

impl CategoryLinesQuery {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }
}

/// Parameters of the monthly overview dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewQuery {
    pub months_for_bar: usize,
    pub top_k: usize,
    pub locale: Option<String>,
    pub user_id: Option<String>,
}

impl Default for OverviewQuery {
    fn default() -> Self {
        Self {
            months_for_bar: DEFAULT_MONTHS_FOR_BAR,
            top_k: DEFAULT_TOP_K,
            locale: None,
            user_id: None,
        }
    }
}

impl OverviewQuery {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }
}
