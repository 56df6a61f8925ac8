//! User profile types.
//!
//! A profile belongs to either a customer or a supermarket operator. The
//! role-specific data lives in [`Account`] so a customer can never carry a
//! store id and a store account can never carry favorites.

use serde::{Deserialize, Serialize};

use crate::types::{BusinessHours, Email, ProfileId, StoreId};

/// Who a profile belongs to. Fixed when the profile is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Supermarket,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "CUSTOMER"),
            Self::Supermarket => write!(f, "SUPERMARKET"),
        }
    }
}

/// Stores a customer follows, in the order they were followed.
///
/// Each store appears at most once. Equality ignores order, so unfollowing
/// and re-following a store gives back an equal list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<StoreId>", into = "Vec<StoreId>")]
pub struct FavoriteStores(Vec<StoreId>);

impl FavoriteStores {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn contains(&self, store_id: &StoreId) -> bool {
        self.0.contains(store_id)
    }

    /// Append `store_id`. Returns false if it was already followed.
    pub fn insert(&mut self, store_id: StoreId) -> bool {
        if self.contains(&store_id) {
            return false;
        }
        self.0.push(store_id);
        true
    }

    /// Remove `store_id`, keeping the order of the rest. Returns false if it
    /// was not followed.
    pub fn remove(&mut self, store_id: &StoreId) -> bool {
        let before = self.0.len();
        self.0.retain(|id| id != store_id);
        self.0.len() != before
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoreId> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a FavoriteStores {
    type Item = &'a StoreId;
    type IntoIter = std::slice::Iter<'a, StoreId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq for FavoriteStores {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for FavoriteStores {}

impl From<Vec<StoreId>> for FavoriteStores {
    /// Drops repeated ids, keeping the first occurrence.
    fn from(ids: Vec<StoreId>) -> Self {
        let mut favorites = Self::new();
        for id in ids {
            favorites.insert(id);
        }
        favorites
    }
}

impl From<FavoriteStores> for Vec<StoreId> {
    fn from(favorites: FavoriteStores) -> Self {
        favorites.0
    }
}

/// Role-keyed account data.
///
/// Serialized inline with the profile, using `role` as the tag:
/// `{"role": "CUSTOMER", "favorites": [...]}` or
/// `{"role": "SUPERMARKET", "storeId": "s1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum Account {
    #[serde(rename = "CUSTOMER")]
    Customer {
        /// Stores the customer follows.
        #[serde(default)]
        favorites: FavoriteStores,
    },
    #[serde(rename = "SUPERMARKET", rename_all = "camelCase")]
    Supermarket {
        /// The store this account operates.
        store_id: StoreId,
    },
}

impl Account {
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Customer { .. } => Role::Customer,
            Self::Supermarket { .. } => Role::Supermarket,
        }
    }
}

/// The logged-in user's profile, as persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: ProfileId,
    /// Public search code, only set for store accounts.
    #[serde(rename = "uniqueId", default, skip_serializing_if = "Option::is_none")]
    pub unique_code: Option<String>,
    pub name: String,
    pub email: Email,
    #[serde(flatten)]
    pub account: Account,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<BusinessHours>,
}

impl UserProfile {
    /// A customer profile with no favorites yet.
    #[must_use]
    pub fn customer(id: ProfileId, name: impl Into<String>, email: Email) -> Self {
        Self::with_account(
            id,
            name,
            email,
            Account::Customer {
                favorites: FavoriteStores::new(),
            },
        )
    }

    /// A store account operating `store_id`.
    #[must_use]
    pub fn supermarket(
        id: ProfileId,
        name: impl Into<String>,
        email: Email,
        store_id: StoreId,
    ) -> Self {
        Self::with_account(id, name, email, Account::Supermarket { store_id })
    }

    fn with_account(id: ProfileId, name: impl Into<String>, email: Email, account: Account) -> Self {
        Self {
            id,
            unique_code: None,
            name: name.into(),
            email,
            account,
            avatar_url: None,
            banner_url: None,
            business_hours: None,
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.account.role()
    }

    /// The operated store, for store accounts.
    #[must_use]
    pub const fn store_id(&self) -> Option<&StoreId> {
        match &self.account {
            Account::Supermarket { store_id } => Some(store_id),
            Account::Customer { .. } => None,
        }
    }

    /// Followed stores, for customers.
    #[must_use]
    pub const fn favorites(&self) -> Option<&FavoriteStores> {
        match &self.account {
            Account::Customer { favorites } => Some(favorites),
            Account::Supermarket { .. } => None,
        }
    }
}
