use std::collections::HashMap;

use rust_decimal::Decimal;

use super::category::CategoryKey;
use super::month::MonthBucket;

/// Summed values of one category, aligned positionally to a month window.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub key: CategoryKey,

    /// Display title (registry title, "uncategorized" title, or the raw id)
    pub title: String,

    /// One value per month of the owning window, full precision
    pub values: Vec<Decimal>,
}

impl CategorySeries {
    /// Sum of all values, unrounded. `None` if the sum leaves the `Decimal` range.
    pub fn total(&self) -> Option<Decimal> {
        self.values
            .iter()
            .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
    }
}

/// A category series after ranking.
///
/// Within one result set, a lower `rank` never has a smaller `total`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSeries {
    pub series: CategorySeries,

    /// Sum of `series.values` at full precision
    pub total: Decimal,

    /// Zero-based position after the stable sort
    pub rank: usize,

    /// Color assigned by the ranking stage
    pub color: String,
}

impl RankedSeries {
    pub fn key(&self) -> &CategoryKey {
        &self.series.key
    }

    pub fn title(&self) -> &str {
        &self.series.title
    }

    pub fn values(&self) -> &[Decimal] {
        &self.series.values
    }
}

/// Output of the grouping stage: `category → values aligned to months`.
///
/// Iteration order is the order in which categories were first encountered,
/// which is what keeps tie-breaking in the ranking stage deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSeries {
    months: Vec<MonthBucket>,
    series: Vec<CategorySeries>,
    index: HashMap<CategoryKey, usize>,
}

impl GroupedSeries {
    pub fn new(months: Vec<MonthBucket>) -> Self {
        Self {
            months,
            series: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn months(&self) -> &[MonthBucket] {
        &self.months
    }

    /// Series in first-encounter order.
    pub fn series(&self) -> &[CategorySeries] {
        &self.series
    }

    pub fn into_series(self) -> Vec<CategorySeries> {
        self.series
    }

    pub fn get(&self, key: &CategoryKey) -> Option<&CategorySeries> {
        self.index.get(key).map(|&i| &self.series[i])
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Return the series for `key`, creating a zero-filled one if this is the
    /// first time the key is seen.
    pub fn entry(&mut self, key: CategoryKey, title: impl FnOnce() -> String) -> &mut CategorySeries {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.series.len();
                self.series.push(CategorySeries {
                    key: key.clone(),
                    title: title(),
                    values: vec![Decimal::ZERO; self.months.len()],
                });
                self.index.insert(key, idx);
                idx
            }
        };
        &mut self.series[idx]
    }

    /// Element-wise sum across every category, one value per month.
    /// `None` if any month's sum leaves the `Decimal` range.
    pub fn month_totals(&self) -> Option<Vec<Decimal>> {
        let mut totals = vec![Decimal::ZERO; self.months.len()];
        for series in &self.series {
            for (total, value) in totals.iter_mut().zip(&series.values) {
                *total = total.checked_add(*value)?;
            }
        }
        Some(totals)
    }
}
