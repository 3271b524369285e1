use chrono::{Datelike, Locale, NaiveDate, NaiveTime};

use crate::errors::CoreError;
use crate::models::month::MonthBucket;

/// Locale used when neither the requested nor the configured locale resolves.
const FALLBACK_LOCALE: Locale = Locale::en_US;

/// Build `count` consecutive months ending with the month containing `reference`.
///
/// Oldest first. Returns fewer entries only if the window would run past the
/// start of chrono's supported calendar.
pub fn build_months(reference: NaiveDate, count: usize) -> Vec<MonthBucket> {
    let mut months = Vec::with_capacity(count);
    let mut current = Some(MonthBucket::from_date(reference));
    while months.len() < count {
        match current {
            Some(month) => {
                months.push(month);
                current = month.pred();
            }
            None => break,
        }
    }
    months.reverse();
    months
}

/// January through `last_month_index` (inclusive) of `year`.
pub fn build_year_months(year: i32, last_month_index: u32) -> Result<Vec<MonthBucket>, CoreError> {
    if last_month_index > 11 {
        return Err(CoreError::InvalidParameter(format!(
            "month index must be within 0..=11, got {last_month_index}"
        )));
    }
    (0..=last_month_index)
        .map(|m| {
            MonthBucket::new(year, m).ok_or_else(|| {
                CoreError::InvalidParameter(format!("year {year} is outside the supported range"))
            })
        })
        .collect()
}

/// Last month to include for a yearly window.
///
/// December, unless `year` is the current year and `limit_to_elapsed` is set,
/// in which case the current month (no future months are fabricated).
pub fn resolve_last_month_index(year: i32, limit_to_elapsed: bool, today: NaiveDate) -> u32 {
    if limit_to_elapsed && year == today.year() {
        today.month0()
    } else {
        11
    }
}

/// Inclusive date range covering every month of the window.
pub fn fetch_range(months: &[MonthBucket]) -> Option<(NaiveDate, NaiveDate)> {
    let from = months.first()?.first_day()?;
    let to = months.last()?.last_day()?;
    Some((from, to))
}

/// Reject a window length of zero or one above `max`.
pub fn validate_count(name: &str, count: usize, max: usize) -> Result<(), CoreError> {
    if count == 0 {
        return Err(CoreError::InvalidParameter(format!(
            "{name} must be greater than zero"
        )));
    }
    if count > max {
        return Err(CoreError::InvalidParameter(format!(
            "{name} of {count} exceeds maximum of {max}"
        )));
    }
    Ok(())
}

/// Formats abbreviated month names for a locale.
///
/// Accepts BCP-47 style tags (`en`, `de-DE`) as well as POSIX names (`ru_RU`).
/// An unknown locale never fails: the configured default is used instead,
/// and if that is unknown too, `en_US`.
#[derive(Debug, Clone, Copy)]
pub struct MonthLabeler {
    locale: Locale,
}

impl MonthLabeler {
    pub fn new(requested: Option<&str>, default_locale: &str) -> Self {
        if let Some(tag) = requested {
            if let Some(locale) = resolve_locale(tag) {
                return Self { locale };
            }
            tracing::warn!(locale = tag, fallback = default_locale, "Unknown locale, using default");
        }
        let locale = resolve_locale(default_locale).unwrap_or_else(|| {
            tracing::warn!(locale = default_locale, "Unknown default locale, using en_US");
            FALLBACK_LOCALE
        });
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Abbreviated month name, e.g. "Jan".
    pub fn label(&self, month: MonthBucket) -> String {
        match month.first_day() {
            Some(day) => day
                .and_time(NaiveTime::MIN)
                .and_utc()
                .format_localized("%b", self.locale)
                .to_string(),
            None => month.to_string(),
        }
    }

    pub fn labels(&self, months: &[MonthBucket]) -> Vec<String> {
        months.iter().map(|m| self.label(*m)).collect()
    }
}

impl Default for MonthLabeler {
    fn default() -> Self {
        Self {
            locale: FALLBACK_LOCALE,
        }
    }
}

/// Map a locale tag onto a chrono `Locale`.
pub fn resolve_locale(tag: &str) -> Option<Locale> {
    let normalized = normalize_locale_tag(tag)?;
    Locale::try_from(normalized.as_str()).ok()
}

/// `en` → `en_US`, `de-de` → `de_DE`, `pt_BR` → `pt_BR`.
fn normalize_locale_tag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }
    let mut parts = tag.split(['-', '_']);
    let language = parts.next()?.to_ascii_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => {
            Some(format!("{language}_{}", region.to_ascii_uppercase()))
        }
        _ => default_region(&language).map(|region| format!("{language}_{region}")),
    }
}

fn default_region(language: &str) -> Option<&'static str> {
    let region = match language {
        "en" => "US",
        "ru" => "RU",
        "be" => "BY",
        "uk" => "UA",
        "pl" => "PL",
        "de" => "DE",
        "fr" => "FR",
        "es" => "ES",
        "it" => "IT",
        "pt" => "PT",
        "nl" => "NL",
        "sv" => "SE",
        "cs" => "CZ",
        "tr" => "TR",
        "ja" => "JP",
        "zh" => "CN",
        "ko" => "KR",
        _ => return None,
    };
    Some(region)
}
