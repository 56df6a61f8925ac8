//! In-memory catalog of stores and products.
//!
//! A [`CatalogStore`] is built from a [`CatalogSeed`] for one session. Store
//! operators get an owned scope whose products are pre-filtered to their
//! store; customers get a browsing scope over every product and cannot
//! mutate anything.
//!
//! Mutations are synchronous and visible to the next read. A failed mutation
//! leaves the collection untouched.

mod draft;

pub use draft::{DEFAULT_PRODUCT_IMAGE, ProductDraft, ProductPatch, ValidationError};

use market_catalog_core::{
    CategoryFilter, InvalidStateError, Product, ProductId, RegionFilter, Store, StoreId,
    UserProfile,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::add_breadcrumb;
use crate::fixtures::CatalogSeed;

/// Errors from catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid product: {0}")]
    Validation(#[from] ValidationError),

    /// The id is not among the caller's products.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
}

/// Who the catalog is serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogScope {
    /// Read-only view over every store's products.
    Browsing,
    /// Products of one store, mutable by its operator.
    Owned(StoreId),
}

/// Store search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFilter {
    pub search_term: String,
    pub region: RegionFilter,
}

impl StoreFilter {
    /// Filter on the search term only, across all regions.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            region: RegionFilter::All,
        }
    }

    /// Filter on the region only.
    #[must_use]
    pub fn region(region: RegionFilter) -> Self {
        Self {
            search_term: String::new(),
            region,
        }
    }

    fn matches(&self, store: &Store) -> bool {
        self.region.matches(store.region) && store.matches_search(&self.search_term)
    }
}

/// Confirmation that a product is about to be deleted.
///
/// Only [`CatalogStore::request_delete`] can produce one, so a delete is
/// always preceded by a lookup of the product it removes.
#[derive(Debug, PartialEq, Eq)]
pub struct DeleteIntent {
    product_id: ProductId,
}

impl DeleteIntent {
    /// Product the intent targets.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }
}

/// The session's catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    stores: Vec<Store>,
    products: Vec<Product>,
    scope: CatalogScope,
}

impl CatalogStore {
    /// Browsing scope over the whole seed.
    #[must_use]
    pub fn for_browsing(seed: CatalogSeed) -> Self {
        Self {
            stores: seed.stores,
            products: seed.products,
            scope: CatalogScope::Browsing,
        }
    }

    /// Owned scope for the operator of `store_id`.
    #[must_use]
    pub fn for_operator(seed: CatalogSeed, store_id: StoreId) -> Self {
        let products = seed
            .products
            .into_iter()
            .filter(|p| p.store_id == store_id)
            .collect();
        Self {
            stores: seed.stores,
            products,
            scope: CatalogScope::Owned(store_id),
        }
    }

    /// The scope matching `profile`'s role.
    #[must_use]
    pub fn for_profile(seed: CatalogSeed, profile: &UserProfile) -> Self {
        match profile.store_id() {
            Some(store_id) => Self::for_operator(seed, store_id.clone()),
            None => Self::for_browsing(seed),
        }
    }

    #[must_use]
    pub const fn scope(&self) -> &CatalogScope {
        &self.scope
    }

    /// Stores matching `filter`, in source order.
    #[must_use]
    pub fn list_stores(&self, filter: &StoreFilter) -> Vec<&Store> {
        self.stores.iter().filter(|s| filter.matches(s)).collect()
    }

    #[must_use]
    pub fn find_store(&self, id: &StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.id == id)
    }

    /// Products of `store_id` narrowed by `category`, newest first.
    #[must_use]
    pub fn list_products(&self, store_id: &StoreId, category: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.store_id == store_id && category.matches(p.category))
            .collect()
    }

    /// Promoted products, optionally restricted to one store.
    #[must_use]
    pub fn promotions(&self, store_id: Option<&StoreId>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_promotion && store_id.is_none_or(|id| &p.store_id == id))
            .collect()
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Every product in scope.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Validate `draft`, assign a fresh id and insert it first.
    ///
    /// # Errors
    ///
    /// `Validation` for a rejected draft, `InvalidState` in the browsing
    /// scope.
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<&Product, CatalogError> {
        let owner = self.owner()?;
        let product = draft.into_product(ProductId::generate(), owner)?;

        info!(product_id = %product.id, store_id = %product.store_id, "Product created");
        add_breadcrumb("catalog", "Created product", Some(&[("product_id", product.id.as_str())]));

        let id = product.id.clone();
        self.products.insert(0, product);
        self.product(&id).ok_or(CatalogError::NotFound(id))
    }

    /// Apply `patch` to one of the operator's products.
    ///
    /// The patched product is validated as a whole before it replaces the
    /// current one.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is not one of the operator's products,
    /// `Validation` if the result is invalid, `InvalidState` in the browsing
    /// scope.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<&Product, CatalogError> {
        let owner = self.owner()?.clone();
        let index = self.owned_index(id, &owner)?;
        let current = self.products.get(index).ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        let updated = patch.apply_to(current).into_product(id.clone(), &owner)?;

        debug!(product_id = %id, "Product updated");
        add_breadcrumb("catalog", "Updated product", Some(&[("product_id", id.as_str())]));

        let slot = self
            .products
            .get_mut(index)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        *slot = updated;
        Ok(&*slot)
    }

    /// Flip the promotion flag. The original price is left as it is.
    ///
    /// # Errors
    ///
    /// `NotFound` or `InvalidState` as for [`Self::update_product`].
    pub fn toggle_promotion(&mut self, id: &ProductId) -> Result<&Product, CatalogError> {
        let owner = self.owner()?.clone();
        let index = self.owned_index(id, &owner)?;
        let product = self
            .products
            .get_mut(index)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        product.is_promotion = !product.is_promotion;
        debug!(product_id = %id, is_promotion = product.is_promotion, "Promotion toggled");
        Ok(&*product)
    }

    /// First step of a delete: confirm the product exists in scope.
    ///
    /// # Errors
    ///
    /// `NotFound` or `InvalidState` as for [`Self::update_product`].
    pub fn request_delete(&self, id: &ProductId) -> Result<DeleteIntent, CatalogError> {
        let owner = self.owner()?;
        self.owned_index(id, owner)?;
        Ok(DeleteIntent {
            product_id: id.clone(),
        })
    }

    /// Second step of a delete: remove the confirmed product.
    ///
    /// # Errors
    ///
    /// `NotFound` if the product disappeared since the intent was issued.
    pub fn delete_product(&mut self, intent: DeleteIntent) -> Result<Product, CatalogError> {
        let owner = self.owner()?.clone();
        let index = self.owned_index(&intent.product_id, &owner)?;
        let removed = self.products.remove(index);

        info!(product_id = %removed.id, "Product deleted");
        add_breadcrumb("catalog", "Deleted product", Some(&[("product_id", removed.id.as_str())]));
        Ok(removed)
    }

    fn owner(&self) -> Result<&StoreId, InvalidStateError> {
        match &self.scope {
            CatalogScope::Owned(store_id) => Ok(store_id),
            CatalogScope::Browsing => Err(InvalidStateError::NotAnOperator),
        }
    }

    fn owned_index(&self, id: &ProductId, owner: &StoreId) -> Result<usize, CatalogError> {
        self.products
            .iter()
            .position(|p| &p.id == id && &p.store_id == owner)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }
}
