use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An entry of the category registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: None,
        }
    }
}

/// Grouping key for a category.
///
/// Transactions without a category are grouped under the empty-string
/// sentinel, which is a first-class key like any other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn from_category_id(category_id: Option<&str>) -> Self {
        Self(category_id.unwrap_or_default().to_string())
    }

    pub fn uncategorized() -> Self {
        Self(String::new())
    }

    pub fn is_uncategorized(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw grouping key (empty for the uncategorized bucket).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The category id to report back to callers; `None` for the sentinel.
    pub fn category_id(&self) -> Option<String> {
        if self.is_uncategorized() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

impl From<&str> for CategoryKey {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Title lookup built from the category registry.
///
/// Ids missing from the registry fall back to the raw id; the uncategorized
/// sentinel gets its own configured title.
#[derive(Debug, Clone, Default)]
pub struct CategoryTitles {
    titles: HashMap<String, String>,
    uncategorized_title: String,
}

impl CategoryTitles {
    pub fn new(categories: &[Category], uncategorized_title: impl Into<String>) -> Self {
        Self {
            titles: categories
                .iter()
                .map(|c| (c.id.clone(), c.title.clone()))
                .collect(),
            uncategorized_title: uncategorized_title.into(),
        }
    }

    pub fn title_for(&self, key: &CategoryKey) -> String {
        if key.is_uncategorized() {
            return self.uncategorized_title.clone();
        }
        self.titles
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| key.as_str().to_string())
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
