//! Product drafts, patches and their validation.

use market_catalog_core::{Category, Price, Product, ProductId, StoreId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Image used when an operator does not provide one.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1542838132-92c53300491e?auto=format&fit=crop&q=80&w=400";

/// Reasons a product draft is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("product name is required")]
    MissingName,

    #[error("price cannot be negative")]
    NegativePrice,

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("product has no store")]
    MissingStore,

    #[error("product belongs to store {draft}, not {owner}")]
    ForeignStore {
        /// Store the draft names.
        draft: StoreId,
        /// Store the catalog operates.
        owner: StoreId,
    },

    /// Only checked while the product is on promotion.
    #[error("original price must not be below the price")]
    OriginalBelowPrice,
}

/// Fields an operator fills in to create a product.
///
/// The category is free text because it comes straight from a form; it is
/// checked against the fixed category set on validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub image_url: String,
    pub is_promotion: bool,
    pub category: String,
    pub store_id: Option<StoreId>,
}

impl ProductDraft {
    /// An empty draft for `store_id`, as the editor opens it.
    #[must_use]
    pub fn blank(store_id: StoreId) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            original_price: None,
            image_url: DEFAULT_PRODUCT_IMAGE.to_string(),
            is_promotion: false,
            category: Category::Hortifruti.to_string(),
            store_id: Some(store_id),
        }
    }

    /// The draft that reproduces an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount,
            original_price: product.original_price.map(|p| p.amount),
            image_url: product.image_url.clone(),
            is_promotion: product.is_promotion,
            category: product.category.to_string(),
            store_id: Some(product.store_id.clone()),
        }
    }

    /// Validate against the operated store and build the product under `id`.
    pub(crate) fn into_product(
        self,
        id: ProductId,
        owner: &StoreId,
    ) -> Result<Product, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let price = Price::brl(self.price);
        if price.is_negative() {
            return Err(ValidationError::NegativePrice);
        }

        // A non-promoted product keeps its original price hidden, so only a
        // shown one is checked.
        let original_price = self.original_price.map(Price::brl);
        if self.is_promotion
            && original_price.is_some_and(|original| original.amount < price.amount)
        {
            return Err(ValidationError::OriginalBelowPrice);
        }

        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| ValidationError::UnknownCategory(e.0))?;

        let store_id = self.store_id.ok_or(ValidationError::MissingStore)?;
        if &store_id != owner {
            return Err(ValidationError::ForeignStore {
                draft: store_id,
                owner: owner.clone(),
            });
        }

        Ok(Product {
            id,
            name: name.to_owned(),
            description: self.description,
            price,
            original_price,
            image_url: self.image_url,
            is_promotion: self.is_promotion,
            category,
            store_id,
        })
    }
}

/// Replacement values for an existing product. `None` keeps the current
/// value; `original_price: Some(None)` clears the original price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub original_price: Option<Option<Decimal>>,
    pub image_url: Option<String>,
    pub is_promotion: Option<bool>,
    pub category: Option<String>,
}

impl ProductPatch {
    /// Patch that only changes the price.
    #[must_use]
    pub fn price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    /// Patch that replaces every editable field with the draft's values.
    #[must_use]
    pub fn replace_with(draft: ProductDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            original_price: Some(draft.original_price),
            image_url: Some(draft.image_url),
            is_promotion: Some(draft.is_promotion),
            category: Some(draft.category),
        }
    }

    /// Overlay the patch onto `product`'s current values.
    pub(crate) fn apply_to(self, product: &Product) -> ProductDraft {
        let mut draft = ProductDraft::from_product(product);
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(original_price) = self.original_price {
            draft.original_price = original_price;
        }
        if let Some(image_url) = self.image_url {
            draft.image_url = image_url;
        }
        if let Some(is_promotion) = self.is_promotion {
            draft.is_promotion = is_promotion;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        draft
    }
}
