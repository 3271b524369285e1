use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::category::CategoryKey;
use crate::models::series::{CategorySeries, RankedSeries};
use crate::models::settings::{ColorStrategy, StatsSettings, DEFAULT_PALETTE};

/// Orders category series by total and assigns chart colors.
pub struct RankingService {
    palette: Vec<String>,
    strategy: ColorStrategy,
}

impl RankingService {
    pub fn new(palette: Vec<String>, strategy: ColorStrategy) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            palette
        };
        Self { palette, strategy }
    }

    pub fn from_settings(settings: &StatsSettings) -> Self {
        Self::new(settings.palette.clone(), settings.color_strategy)
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Sort `series` by total, largest first.
    ///
    /// The sort is stable: equal totals keep the order the series came in
    /// (first-encounter order from grouping), never alphabetical.
    pub fn rank(&self, series: Vec<CategorySeries>) -> Result<Vec<RankedSeries>, CoreError> {
        let mut with_totals: Vec<(Decimal, CategorySeries)> = series
            .into_iter()
            .map(|s| match s.total() {
                Some(total) => Ok((total, s)),
                None => Err(CoreError::InvalidParameter(format!(
                    "total of category '{}' exceeds the supported amount range",
                    s.title
                ))),
            })
            .collect::<Result<_, _>>()?;

        // slice::sort_by is stable
        with_totals.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(with_totals
            .into_iter()
            .enumerate()
            .map(|(rank, (total, series))| {
                let color = self.color_for(rank, &series.key).to_string();
                RankedSeries {
                    series,
                    total,
                    rank,
                    color,
                }
            })
            .collect())
    }

    /// First `k` entries; all of them if `k` exceeds the count.
    pub fn top_k(&self, mut ranked: Vec<RankedSeries>, k: usize) -> Vec<RankedSeries> {
        ranked.truncate(k);
        ranked
    }

    /// Palette entry for a series at output position `rank`.
    pub fn color_for(&self, rank: usize, key: &CategoryKey) -> &str {
        let idx = match self.strategy {
            ColorStrategy::Positional => rank % self.palette.len(),
            ColorStrategy::CategoryHash => {
                (fnv1a(key.as_str().as_bytes()) % self.palette.len() as u64) as usize
            }
        };
        &self.palette[idx]
    }
}

impl Default for RankingService {
    fn default() -> Self {
        Self::from_settings(&StatsSettings::default())
    }
}

/// 64-bit FNV-1a. Stable across runs and platforms, unlike `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(PRIME)
    })
}
