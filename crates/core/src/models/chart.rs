use serde::{Deserialize, Serialize};

/// One line chart per category, with a single "Expenses" line.
///
/// Generated here, rendered as-is by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLineChart {
    /// `None` for the uncategorized bucket
    pub category_id: Option<String>,

    pub title: String,

    /// Abbreviated month names, one per point
    pub labels: Vec<String>,

    pub datasets: Vec<LineDataset>,
}

impl CategoryLineChart {
    /// The values of the (single) line, or an empty slice.
    pub fn values(&self) -> &[f64] {
        self.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,

    /// Rounded to 2 decimal places
    pub data: Vec<f64>,

    pub border_color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Per-category breakdown for a single month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieBreakdown {
    pub labels: Vec<String>,
    pub datasets: Vec<PieDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieDataset {
    pub data: Vec<f64>,
    /// One color per slice
    pub background_color: Vec<String>,
}

/// Grouped bars: one bar series per top-K category across a month window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarComparison {
    /// Month labels
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    /// Category title
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Total expenses across all categories per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalLine {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

impl TotalLine {
    pub fn values(&self) -> &[f64] {
        self.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }
}

/// The monthly dashboard: pie + bar + line, plus the resolved parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensesOverview {
    pub pie: PieBreakdown,
    pub bar: BarComparison,
    pub line: TotalLine,
    pub meta: OverviewMeta,
}

/// Echo of the parameters the overview was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewMeta {
    /// Current month, 0..=11
    pub month_index: u32,
    pub year: i32,
    pub months_bar: usize,
    pub top_k: usize,
}
