use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single calendar-month slot.
///
/// `month_index` is zero-based (0 = January, 11 = December), matching the
/// `monthIndex` the dashboard frontend expects. Ordering is by `(year, month_index)`,
/// which the derive gives us for free because of field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket {
    pub year: i32,
    pub month_index: u32,
}

impl MonthBucket {
    /// Build a bucket, returning `None` when `month_index` is not in `0..=11`
    /// or the year is outside chrono's supported range.
    pub fn new(year: i32, month_index: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month_index + 1, 1)?;
        Some(Self { year, month_index })
    }

    /// The bucket containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month_index: date.month0(),
        }
    }

    /// First calendar day of this month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1)
    }

    /// Last calendar day of this month.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.succ()?.first_day()?.pred_opt()
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month_index
    }

    /// The following month.
    pub fn succ(&self) -> Option<Self> {
        if self.month_index == 11 {
            Self::new(self.year.checked_add(1)?, 0)
        } else {
            Self::new(self.year, self.month_index + 1)
        }
    }

    /// The preceding month.
    pub fn pred(&self) -> Option<Self> {
        if self.month_index == 0 {
            Self::new(self.year.checked_sub(1)?, 11)
        } else {
            Self::new(self.year, self.month_index - 1)
        }
    }
}

impl std::fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month_index + 1)
    }
}
