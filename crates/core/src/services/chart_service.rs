use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::CoreError;
use crate::models::chart::{
    BarComparison, BarDataset, CategoryLineChart, LineDataset, PieBreakdown, PieDataset, TotalLine,
};
use crate::models::month::MonthBucket;
use crate::models::series::{GroupedSeries, RankedSeries};
use crate::models::settings::{parse_hex_color, StatsSettings};

/// Turns grouped/ranked numbers into chart-ready datasets.
///
/// The core computes all the numbers; the frontend only renders.
/// Values are rounded to 2 decimal places here and nowhere else; sums are
/// always taken over the unrounded series first.
pub struct ChartComposer {
    series_label: String,
    line_tension: f64,
    line_point_radius: u32,
    total_line_label: String,
    total_line_color: String,
    total_line_tension: f64,
    bar_alpha: f64,
}

impl ChartComposer {
    pub fn new() -> Self {
        Self::from_settings(&StatsSettings::default())
    }

    pub fn from_settings(settings: &StatsSettings) -> Self {
        Self {
            series_label: settings.series_label.clone(),
            line_tension: settings.line_tension,
            line_point_radius: settings.line_point_radius,
            total_line_label: settings.total_line_label.clone(),
            total_line_color: settings.total_line_color.clone(),
            total_line_tension: settings.total_line_tension,
            bar_alpha: settings.bar_alpha,
        }
    }

    /// One single-line chart per category, in ranked order, optionally only the first `top_n`.
    pub fn to_category_lines(
        &self,
        ranked: &[RankedSeries],
        labels: &[String],
        top_n: Option<usize>,
    ) -> Vec<CategoryLineChart> {
        let take = top_n.unwrap_or(ranked.len());
        ranked
            .iter()
            .take(take)
            .map(|r| CategoryLineChart {
                category_id: r.key().category_id(),
                title: r.title().to_string(),
                labels: labels.to_vec(),
                datasets: vec![LineDataset {
                    label: self.series_label.clone(),
                    data: round_all(r.values()),
                    border_color: r.color.clone(),
                    background_color: Some("transparent".to_string()),
                    tension: Some(self.line_tension),
                    point_radius: Some(self.line_point_radius),
                    fill: Some(false),
                }],
            })
            .collect()
    }

    /// One slice per category with its value in `target`.
    ///
    /// Categories without activity in `target` still get a slice, valued 0.
    /// If `target` is not part of `months`, every slice is 0.
    pub fn to_pie_breakdown(
        &self,
        ranked: &[RankedSeries],
        months: &[MonthBucket],
        target: MonthBucket,
    ) -> PieBreakdown {
        let position = months.iter().position(|m| *m == target);

        let mut labels = Vec::with_capacity(ranked.len());
        let mut data = Vec::with_capacity(ranked.len());
        let mut colors = Vec::with_capacity(ranked.len());

        for r in ranked {
            let value = position
                .and_then(|p| r.values().get(p).copied())
                .unwrap_or(Decimal::ZERO);
            labels.push(r.title().to_string());
            data.push(round2(value));
            colors.push(r.color.clone());
        }

        PieBreakdown {
            labels,
            datasets: vec![PieDataset {
                data,
                background_color: colors,
            }],
        }
    }

    /// Grouped bars: one bar series per (already truncated) top-K category.
    pub fn to_bar_comparison(&self, ranked_top_k: &[RankedSeries], labels: &[String]) -> BarComparison {
        BarComparison {
            labels: labels.to_vec(),
            datasets: ranked_top_k
                .iter()
                .map(|r| BarDataset {
                    label: r.title().to_string(),
                    data: round_all(r.values()),
                    background_color: Some(hex_with_alpha(&r.color, self.bar_alpha)),
                })
                .collect(),
        }
    }

    /// Sum across *all* categories per month, not just the top-K.
    pub fn to_total_line(
        &self,
        grouped: &GroupedSeries,
        labels: &[String],
    ) -> Result<TotalLine, CoreError> {
        let totals = grouped.month_totals().ok_or_else(|| {
            CoreError::InvalidParameter("monthly total exceeds the supported amount range".into())
        })?;
        Ok(TotalLine {
            labels: labels.to_vec(),
            datasets: vec![LineDataset {
                label: self.total_line_label.clone(),
                data: round_all(&totals),
                border_color: self.total_line_color.clone(),
                background_color: None,
                tension: Some(self.total_line_tension),
                point_radius: None,
                fill: Some(false),
            }],
        })
    }
}

impl Default for ChartComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 2 decimal places (half away from zero) and convert for emission.
pub fn round2(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

fn round_all(values: &[Decimal]) -> Vec<f64> {
    values.iter().map(|v| round2(*v)).collect()
}

/// `#RRGGBB` → `rgba(r, g, b, alpha)`. Strings that are not hex colors pass through unchanged.
pub fn hex_with_alpha(hex: &str, alpha: f64) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {alpha})"),
        None => hex.to_string(),
    }
}
