use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Reference 12-color chart palette.
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#4F46E5", "#06B6D4", "#F59E0B", "#10B981", "#EF4444", "#8B5CF6", "#22C55E", "#0EA5E9",
    "#E11D48", "#84CC16", "#A855F7", "#F97316",
];

/// How a series picks its color from the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorStrategy {
    /// `palette[rank % len]`: color follows output position, so the same
    /// category can change color between requests.
    #[default]
    Positional,
    /// `palette[hash(category) % len]`: the same category always gets the
    /// same color, collisions allowed.
    CategoryHash,
}

/// Engine configuration, passed in at construction and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSettings {
    /// `#RRGGBB` colors, in assignment order
    pub palette: Vec<String>,

    pub color_strategy: ColorStrategy,

    /// Locale used when the request has none or its locale cannot be formatted
    pub default_locale: String,

    /// Display title of the bucket for transactions without a category
    pub uncategorized_title: String,

    /// Dataset label of each per-category line
    pub series_label: String,
    pub line_tension: f64,
    pub line_point_radius: u32,

    pub total_line_label: String,
    pub total_line_color: String,
    pub total_line_tension: f64,

    /// Alpha applied to palette colors in the bar chart
    pub bar_alpha: f64,

    /// Longest window (in months) any request may ask for
    pub max_window_months: usize,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            color_strategy: ColorStrategy::Positional,
            default_locale: "en".to_string(),
            uncategorized_title: "Uncategorized".to_string(),
            series_label: "Expenses".to_string(),
            line_tension: 0.3,
            line_point_radius: 2,
            total_line_label: "Total Expenses".to_string(),
            total_line_color: "#4F46E5".to_string(),
            total_line_tension: 0.35,
            bar_alpha: 0.6,
            max_window_months: 120,
        }
    }
}

impl StatsSettings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.palette.is_empty() {
            return Err(CoreError::InvalidParameter(
                "palette must contain at least one color".into(),
            ));
        }
        if let Some(bad) = self.palette.iter().find(|c| parse_hex_color(c).is_none()) {
            return Err(CoreError::InvalidParameter(format!(
                "palette color '{bad}' is not of the form #RRGGBB"
            )));
        }
        if !(0.0..=1.0).contains(&self.bar_alpha) {
            return Err(CoreError::InvalidParameter(format!(
                "bar_alpha must be within [0, 1], got {}",
                self.bar_alpha
            )));
        }
        if self.max_window_months == 0 {
            return Err(CoreError::InvalidParameter(
                "max_window_months must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into its components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
