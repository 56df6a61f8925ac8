//! Product categories.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A category name outside the fixed set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// The fixed set of product categories a store can file products under.
///
/// Serialized with the display names the catalog uses (`"Laticínios"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Hortifruti,
    Carnes,
    #[serde(rename = "Laticínios")]
    Laticinios,
    Limpeza,
    Mercearia,
    Bebidas,
    Padaria,
}

impl Category {
    /// Every category, in the order the dashboard lists them.
    pub const ALL: [Self; 7] = [
        Self::Hortifruti,
        Self::Carnes,
        Self::Laticinios,
        Self::Limpeza,
        Self::Mercearia,
        Self::Bebidas,
        Self::Padaria,
    ];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hortifruti => "Hortifruti",
            Self::Carnes => "Carnes",
            Self::Laticinios => "Laticínios",
            Self::Limpeza => "Limpeza",
            Self::Mercearia => "Mercearia",
            Self::Bebidas => "Bebidas",
            Self::Padaria => "Padaria",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Category narrowing for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// The "all categories" sentinel.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Sentinel label shown for [`CategoryFilter::All`].
    pub const ALL_LABEL: &'static str = "Todos";

    /// Whether a product in `category` passes the filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("Laticínios".parse::<Category>().unwrap(), Category::Laticinios);
        assert!("laticínios".parse::<Category>().is_err());
        assert!("Eletrônicos".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::Laticinios).unwrap();
        assert_eq!(json, "\"Laticínios\"");
        let parsed: Category = serde_json::from_str("\"Padaria\"").unwrap();
        assert_eq!(parsed, Category::Padaria);
    }

    #[test]
    fn test_filter_sentinels() {
        assert_eq!("Todos".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Bebidas".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Bebidas)
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Carnes));
        assert!(CategoryFilter::Only(Category::Carnes).matches(Category::Carnes));
        assert!(!CategoryFilter::Only(Category::Carnes).matches(Category::Limpeza));
    }
}
