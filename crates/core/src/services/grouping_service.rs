use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::category::{CategoryKey, CategoryTitles};
use crate::models::month::MonthBucket;
use crate::models::series::GroupedSeries;
use crate::models::transaction::Transaction;
use crate::services::month_service::fetch_range;

/// Buckets transactions by category and calendar month.
///
/// Single pass over the transactions after the month index is built:
/// O(T + C·M) for T transactions, C categories and M months.
pub struct GroupingService;

impl GroupingService {
    pub fn new() -> Self {
        Self
    }

    /// Group `transactions` into one zero-filled series per distinct category,
    /// aligned to `months`.
    ///
    /// Every category that appears in `transactions` gets a series, even when
    /// all of its rows fall outside the window (it stays zero-filled). Rows
    /// outside the window are skipped without error. Fails only when a bucket
    /// sum leaves the `Decimal` range.
    pub fn group(
        &self,
        transactions: &[Transaction],
        months: &[MonthBucket],
        titles: &CategoryTitles,
    ) -> Result<GroupedSeries, CoreError> {
        let positions: HashMap<MonthBucket, usize> = months
            .iter()
            .enumerate()
            .map(|(i, m)| (*m, i))
            .collect();

        let mut grouped = GroupedSeries::new(months.to_vec());
        let mut skipped = 0usize;

        for tx in transactions {
            let key = CategoryKey::from_category_id(tx.category_id.as_deref());
            let series = grouped.entry(key.clone(), || titles.title_for(&key));

            match positions.get(&MonthBucket::from_date(tx.date)) {
                Some(&pos) => match series.values[pos].checked_add(tx.amount) {
                    Some(sum) => series.values[pos] = sum,
                    None => {
                        return Err(CoreError::InvalidParameter(format!(
                            "sum for category '{}' in {} exceeds the supported amount range",
                            series.title, months[pos]
                        )))
                    }
                },
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "Transactions outside the month window were ignored");
        }
        tracing::debug!(
            categories = grouped.len(),
            months = months.len(),
            "Grouped transactions"
        );

        Ok(grouped)
    }
}

/// The rows dated inside `months`, in their original order.
///
/// Used when one fetch feeds several windows, so that each window only sees
/// the categories active in it.
pub fn within_window(transactions: &[Transaction], months: &[MonthBucket]) -> Vec<Transaction> {
    let Some((from, to)) = fetch_range(months) else {
        return Vec::new();
    };
    transactions
        .iter()
        .filter(|t| t.date >= from && t.date <= to)
        .cloned()
        .collect()
}

impl Default for GroupingService {
    fn default() -> Self {
        Self::new()
    }
}
