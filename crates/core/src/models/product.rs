//! Product domain type.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId, StoreId};

/// A product listed by exactly one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Price before the promotion; only meaningful while `is_promotion` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image_url: String,
    pub is_promotion: bool,
    pub category: Category,
    pub store_id: StoreId,
}

impl Product {
    /// The struck-through price to show next to the current one, if any.
    ///
    /// Hidden when the product is not on promotion, even if an original
    /// price is still recorded.
    #[must_use]
    pub const fn shown_original_price(&self) -> Option<&Price> {
        if self.is_promotion {
            self.original_price.as_ref()
        } else {
            None
        }
    }

    /// Rounded percentage off while on promotion.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        self.shown_original_price()
            .and_then(|original| self.price.discount_from(original))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detergente() -> Product {
        Product {
            id: ProductId::new("p3"),
            name: "Detergente Líquido 500ml".to_string(),
            description: String::new(),
            price: Price::from_cents(220),
            original_price: Some(Price::from_cents(350)),
            image_url: String::new(),
            is_promotion: true,
            category: Category::Limpeza,
            store_id: StoreId::new("s1"),
        }
    }

    #[test]
    fn test_discount_while_promoted() {
        assert_eq!(detergente().discount_percent(), Some(37));
    }

    #[test]
    fn test_original_price_hidden_without_promotion() {
        let product = Product {
            is_promotion: false,
            ..detergente()
        };
        assert!(product.shown_original_price().is_none());
        assert!(product.discount_percent().is_none());
    }
}
