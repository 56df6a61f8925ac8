//! Demo stores and products the catalog starts from.

use chrono::NaiveTime;
use market_catalog_core::{
    BusinessHours, Category, Price, Product, ProductId, Region, Store, StoreId,
};

/// Initial contents of a [`CatalogStore`](crate::catalog::CatalogStore).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSeed {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
}

impl CatalogSeed {
    /// Three stores and the four products of store `s1`.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            stores: demo_stores(),
            products: demo_products(),
        }
    }
}

fn hours(open: u32, close: u32) -> Option<BusinessHours> {
    Some(BusinessHours::new(
        NaiveTime::from_hms_opt(open, 0, 0)?,
        NaiveTime::from_hms_opt(close, 0, 0)?,
    ))
}

fn demo_stores() -> Vec<Store> {
    vec![
        Store {
            id: StoreId::new("s1"),
            unique_code: "MC-778".to_string(),
            name: "Supermercado Central".to_string(),
            address: "Av. Paulista, 1000".to_string(),
            region: Region::Centro,
            logo_url: "https://images.unsplash.com/photo-1542838132-92c53300491e?auto=format&fit=crop&q=80&w=200".to_string(),
            banner_url: Some("https://images.unsplash.com/photo-1578916171728-46686eac8d58?auto=format&fit=crop&q=80&w=1200".to_string()),
            rating: 4.8,
            distance_km: Some(1.2),
            is_verified: true,
            business_hours: hours(7, 22),
        },
        Store {
            id: StoreId::new("s2"),
            unique_code: "MC-902".to_string(),
            name: "Hiper Market".to_string(),
            address: "Rua Augusta, 500".to_string(),
            region: Region::Oeste,
            logo_url: "https://images.unsplash.com/photo-1534723452862-4c874018d66d?auto=format&fit=crop&q=80&w=200".to_string(),
            banner_url: Some("https://images.unsplash.com/photo-1604719312563-88296d10d592?auto=format&fit=crop&q=80&w=1200".to_string()),
            rating: 4.5,
            distance_km: Some(2.5),
            is_verified: false,
            business_hours: hours(8, 23),
        },
        Store {
            id: StoreId::new("s3"),
            unique_code: "MC-115".to_string(),
            name: "Mercadinho do Bairro".to_string(),
            address: "Rua das Flores, 12".to_string(),
            region: Region::Leste,
            logo_url: "https://images.unsplash.com/photo-1583258292688-d0213dc5a3a8?auto=format&fit=crop&q=80&w=200".to_string(),
            banner_url: Some("https://images.unsplash.com/photo-1506484334406-f15bde9f57fe?auto=format&fit=crop&q=80&w=1200".to_string()),
            rating: 4.2,
            distance_km: Some(0.8),
            is_verified: true,
            business_hours: hours(7, 20),
        },
    ]
}

fn demo_products() -> Vec<Product> {
    let s1 = StoreId::new("s1");
    vec![
        Product {
            id: ProductId::new("p1"),
            name: "Café Gourmet 500g".to_string(),
            description: "Café torrado e moído de alta qualidade, 100% arábica com notas de chocolate.".to_string(),
            price: Price::from_cents(1890),
            original_price: Some(Price::from_cents(2490)),
            image_url: "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?auto=format&fit=crop&q=80&w=400".to_string(),
            is_promotion: true,
            category: Category::Mercearia,
            store_id: s1.clone(),
        },
        Product {
            id: ProductId::new("p2"),
            name: "Leite Integral 1L".to_string(),
            description: "Leite tipo A, fresco e nutritivo direto da fazenda.".to_string(),
            price: Price::from_cents(450),
            original_price: None,
            image_url: "https://images.unsplash.com/photo-1563636619-e9107da5a1bb?auto=format&fit=crop&q=80&w=400".to_string(),
            is_promotion: false,
            category: Category::Laticinios,
            store_id: s1.clone(),
        },
        Product {
            id: ProductId::new("p3"),
            name: "Detergente Líquido 500ml".to_string(),
            description: "Eficiente contra gordura, fragrância neutra e biodegradável.".to_string(),
            price: Price::from_cents(220),
            original_price: Some(Price::from_cents(350)),
            image_url: "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?auto=format&fit=crop&q=80&w=400".to_string(),
            is_promotion: true,
            category: Category::Limpeza,
            store_id: s1.clone(),
        },
        Product {
            id: ProductId::new("p4"),
            name: "Azeite de Oliva Extra Virgem 500ml".to_string(),
            description: "Prensado a frio, acidez máxima de 0,2%.".to_string(),
            price: Price::from_cents(4290),
            original_price: None,
            image_url: "https://images.unsplash.com/photo-1474979266404-7eaacbad8a0f?auto=format&fit=crop&q=80&w=400".to_string(),
            is_promotion: false,
            category: Category::Mercearia,
            store_id: s1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_seed_shape() {
        let seed = CatalogSeed::demo();
        assert_eq!(seed.stores.len(), 3);
        assert_eq!(seed.products.len(), 4);
        assert!(seed.products.iter().all(|p| p.store_id == StoreId::new("s1")));
        assert!(seed.stores.iter().all(|s| s.business_hours.is_some()));
    }

    #[test]
    fn test_demo_promotions_are_consistent() {
        for product in CatalogSeed::demo().products {
            if let Some(original) = product.original_price {
                assert!(product.is_promotion, "{}", product.id);
                assert!(original.amount >= product.price.amount, "{}", product.id);
            }
        }
    }
}
