//! Style categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse grouping tag for styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Science,
    Journals,
    Color,
    Languages,
    Misc,
    /// Tag for styles merged from other styles. Not a base category.
    Combinations,
}

/// The pre-declared categories, in display order.
///
/// [`Category::Combinations`] is deliberately absent: it only tags merged
/// entries after the fact.
pub const BASE_CATEGORIES: &[Category] = &[
    Category::Science,
    Category::Journals,
    Category::Color,
    Category::Languages,
    Category::Misc,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Science => "science",
            Category::Journals => "journals",
            Category::Color => "color",
            Category::Languages => "languages",
            Category::Misc => "misc",
            Category::Combinations => "combinations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category \"{0}\"; expected one of: science, journals, color, languages, misc, combinations")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "science" => Ok(Category::Science),
            "journals" => Ok(Category::Journals),
            "color" => Ok(Category::Color),
            "languages" => Ok(Category::Languages),
            "misc" => Ok(Category::Misc),
            "combinations" => Ok(Category::Combinations),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
