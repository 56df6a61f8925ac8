//! Supermarket (store) domain type.

use serde::{Deserialize, Serialize};

use crate::types::{BusinessHours, Region, StoreId};

/// A supermarket customers can browse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    /// Human-readable search code such as `MC-778`.
    #[serde(rename = "uniqueId")]
    pub unique_code: String,
    pub name: String,
    pub address: String,
    pub region: Region,
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Distance from the customer in kilometres.
    #[serde(rename = "distance", default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f32>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<BusinessHours>,
}

impl Store {
    /// Search predicate used by the store explorer.
    ///
    /// Matches when the name contains `term` or the unique code equals it,
    /// both case-insensitively. An empty term matches every store.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.unique_code.to_lowercase() == term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn central() -> Store {
        Store {
            id: StoreId::new("s1"),
            unique_code: "MC-778".to_string(),
            name: "Supermercado Central".to_string(),
            address: "Av. Paulista, 1000".to_string(),
            region: Region::Centro,
            logo_url: String::new(),
            banner_url: None,
            rating: 4.8,
            distance_km: Some(1.2),
            is_verified: true,
            business_hours: None,
        }
    }

    #[test]
    fn test_matches_name_substring_case_insensitively() {
        assert!(central().matches_search("central"));
        assert!(central().matches_search("SUPERMERCADO"));
        assert!(!central().matches_search("hiper"));
    }

    #[test]
    fn test_matches_code_only_exactly() {
        assert!(central().matches_search("mc-778"));
        assert!(!central().matches_search("MC-77"));
    }

    #[test]
    fn test_empty_term_matches() {
        assert!(central().matches_search(""));
    }
}
