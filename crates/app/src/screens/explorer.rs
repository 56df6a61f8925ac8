//! Customer store explorer.

use market_catalog_core::{
    CategoryFilter, InvalidStateError, Product, RegionFilter, Store, StoreId, UserProfile,
    favorites,
};

use crate::catalog::{CatalogStore, StoreFilter};
use crate::error::Result;
use crate::session::SessionManager;
use crate::storage::KeyValueStore;

/// Search, region filter and the store currently opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerExplorer {
    filter: StoreFilter,
    selected: Option<StoreId>,
}

impl CustomerExplorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn filter(&self) -> &StoreFilter {
        &self.filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub const fn set_region(&mut self, region: RegionFilter) {
        self.filter.region = region;
    }

    /// Stores matching the current search and region.
    #[must_use]
    pub fn visible_stores<'a>(&self, catalog: &'a CatalogStore) -> Vec<&'a Store> {
        catalog.list_stores(&self.filter)
    }

    /// Open a store. Returns `None`, leaving the selection unchanged, for an
    /// unknown id.
    pub fn select_store<'a>(&mut self, catalog: &'a CatalogStore, id: &StoreId) -> Option<&'a Store> {
        let store = catalog.find_store(id)?;
        self.selected = Some(store.id.clone());
        Some(store)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_store<'a>(&self, catalog: &'a CatalogStore) -> Option<&'a Store> {
        self.selected.as_ref().and_then(|id| catalog.find_store(id))
    }

    /// Promotions of the selected store, or of every store when none is open.
    #[must_use]
    pub fn promotions<'a>(&self, catalog: &'a CatalogStore) -> Vec<&'a Product> {
        catalog.promotions(self.selected.as_ref())
    }

    /// Products of the selected store; empty when none is open.
    #[must_use]
    pub fn store_products<'a>(&self, catalog: &'a CatalogStore) -> Vec<&'a Product> {
        self.selected
            .as_ref()
            .map(|id| catalog.list_products(id, CategoryFilter::All))
            .unwrap_or_default()
    }

    /// Follow or unfollow `store_id` for the logged-in customer.
    ///
    /// Returns whether the store is a favorite afterwards.
    ///
    /// # Errors
    ///
    /// `InvalidState` when logged out or logged in as a store account.
    pub fn toggle_favorite<S: KeyValueStore>(
        &self,
        session: &mut SessionManager<S>,
        store_id: &StoreId,
    ) -> Result<bool> {
        let profile = session.current().ok_or(InvalidStateError::NoSession)?;
        let toggled = favorites::toggle(profile, store_id)?;
        let now_favorite = favorites::is_favorite(&toggled, store_id);
        session.update(toggled)?;
        Ok(now_favorite)
    }

    #[must_use]
    pub fn is_favorite(profile: &UserProfile, store_id: &StoreId) -> bool {
        favorites::is_favorite(profile, store_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use market_catalog_core::{Email, ProfileId, Region, Role};

    use super::*;
    use crate::error::ErrorKind;
    use crate::fixtures::CatalogSeed;
    use crate::session::LoginForm;
    use crate::storage::MemoryStorage;

    fn catalog() -> CatalogStore {
        CatalogStore::for_browsing(CatalogSeed::demo())
    }

    #[test]
    fn test_search_and_region() {
        let catalog = catalog();
        let mut explorer = CustomerExplorer::new();
        assert_eq!(explorer.visible_stores(&catalog).len(), 3);

        explorer.set_search_term("MC-902");
        let stores = explorer.visible_stores(&catalog);
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].name, "Hiper Market");

        explorer.set_search_term("");
        explorer.set_region(RegionFilter::Only(Region::Leste));
        let stores = explorer.visible_stores(&catalog);
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].region, Region::Leste);

        explorer.set_region(RegionFilter::Only(Region::Sul));
        assert!(explorer.visible_stores(&catalog).is_empty());
    }

    #[test]
    fn test_selection_scopes_products_and_promotions() {
        let catalog = catalog();
        let mut explorer = CustomerExplorer::new();
        assert!(explorer.store_products(&catalog).is_empty());
        assert_eq!(explorer.promotions(&catalog).len(), 2);

        assert!(explorer.select_store(&catalog, &StoreId::new("s2")).is_some());
        assert!(explorer.store_products(&catalog).is_empty());
        assert!(explorer.promotions(&catalog).is_empty());

        explorer.select_store(&catalog, &StoreId::new("s1"));
        assert_eq!(explorer.store_products(&catalog).len(), 4);
        assert_eq!(explorer.selected_store(&catalog).unwrap().unique_code, "MC-778");

        assert!(explorer.select_store(&catalog, &StoreId::new("s9")).is_none());
        assert_eq!(explorer.selected_store(&catalog).unwrap().id, StoreId::new("s1"));

        explorer.clear_selection();
        assert!(explorer.selected_store(&catalog).is_none());
    }

    #[test]
    fn test_toggle_favorite_persists_through_session() {
        let mut session = SessionManager::new(MemoryStorage::new());
        session.login(LoginForm::new(Role::Customer, "").into_profile().unwrap());
        let explorer = CustomerExplorer::new();
        let s3 = StoreId::new("s3");

        assert!(explorer.toggle_favorite(&mut session, &s3).unwrap());
        assert!(CustomerExplorer::is_favorite(session.current().unwrap(), &s3));

        assert!(!explorer.toggle_favorite(&mut session, &s3).unwrap());
        assert!(!CustomerExplorer::is_favorite(session.current().unwrap(), &s3));
    }

    #[test]
    fn test_toggle_favorite_rejects_store_account() {
        let mut session = SessionManager::new(MemoryStorage::new());
        session.login(UserProfile::supermarket(
            ProfileId::new("u2"),
            "Supermercado Central",
            Email::demo(),
            StoreId::new("s1"),
        ));

        let err = CustomerExplorer::new()
            .toggle_favorite(&mut session, &StoreId::new("s2"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_toggle_favorite_without_session() {
        let mut session = SessionManager::new(MemoryStorage::new());
        let err = CustomerExplorer::new()
            .toggle_favorite(&mut session, &StoreId::new("s2"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
}
