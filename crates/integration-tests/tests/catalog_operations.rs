//! Catalog queries and mutations against the demo seed.

#![allow(clippy::unwrap_used)]

use market_catalog_app::catalog::{
    CatalogError, CatalogStore, ProductDraft, ProductPatch, StoreFilter, ValidationError,
};
use market_catalog_app::fixtures::CatalogSeed;
use market_catalog_core::{ProductId, Region, RegionFilter, StoreId};
use rust_decimal::Decimal;

fn shopper() -> CatalogStore {
    CatalogStore::for_browsing(CatalogSeed::demo())
}

fn operator(store: &str) -> CatalogStore {
    CatalogStore::for_operator(CatalogSeed::demo(), StoreId::new(store))
}

// =============================================================================
// Store Search
// =============================================================================

#[test]
fn test_unique_code_search_matches_exactly_one_store() {
    let catalog = shopper();
    for term in ["MC-778", "mc-778", "Mc-778"] {
        let stores = catalog.list_stores(&StoreFilter::search(term));
        assert_eq!(stores.len(), 1, "term {term}");
        assert_eq!(stores[0].id, StoreId::new("s1"));
    }
}

#[test]
fn test_partial_code_does_not_match() {
    let catalog = shopper();
    assert!(catalog.list_stores(&StoreFilter::search("MC-77")).is_empty());
}

#[test]
fn test_region_filter_centro() {
    let catalog = shopper();
    let filter = StoreFilter::region("Centro".parse::<RegionFilter>().unwrap());
    let stores = catalog.list_stores(&filter);
    assert!(!stores.is_empty());
    assert!(stores.iter().all(|s| s.region == Region::Centro));
}

#[test]
fn test_region_all_sentinel_keeps_search() {
    let catalog = shopper();
    let filter = StoreFilter {
        search_term: "mercad".to_string(),
        region: "all".parse().unwrap(),
    };
    let names: Vec<_> = catalog.list_stores(&filter).iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Supermercado Central", "Mercadinho do Bairro"]);
}

// =============================================================================
// Product Mutations
// =============================================================================

#[test]
fn test_negative_price_create_fails_without_mutation() {
    let mut catalog = operator("s1");
    let draft = ProductDraft {
        name: "Arroz 5kg".to_string(),
        price: Decimal::NEGATIVE_ONE,
        category: "Mercearia".to_string(),
        ..ProductDraft::blank(StoreId::new("s1"))
    };

    let err = catalog.create_product(draft).unwrap_err();
    assert_eq!(err, CatalogError::Validation(ValidationError::NegativePrice));
    assert_eq!(catalog.products().len(), 4);
}

#[test]
fn test_create_is_newest_first() {
    let mut catalog = operator("s1");
    let draft = ProductDraft {
        name: "Arroz 5kg".to_string(),
        price: Decimal::new(2590, 2),
        category: "Mercearia".to_string(),
        ..ProductDraft::blank(StoreId::new("s1"))
    };

    let id = catalog.create_product(draft).unwrap().id.clone();
    let listed = catalog.list_products(&StoreId::new("s1"), "Mercearia".parse().unwrap());
    assert_eq!(listed[0].id, id);
    assert_eq!(listed.len(), 3);
}

#[test]
fn test_delete_absent_id_is_not_found() {
    let mut catalog = operator("s1");
    let before = catalog.products().to_vec();

    let err = catalog.request_delete(&ProductId::new("nope")).unwrap_err();
    assert_eq!(err, CatalogError::NotFound(ProductId::new("nope")));
    assert_eq!(catalog.products(), before.as_slice());

    let intent = catalog.request_delete(&ProductId::new("p1")).unwrap();
    catalog.delete_product(intent).unwrap();
    assert_eq!(catalog.products().len(), before.len() - 1);
}

#[test]
fn test_cross_store_update_is_not_found() {
    let mut catalog = operator("s2");
    let err = catalog
        .update_product(&ProductId::new("p1"), ProductPatch::price(Decimal::TEN))
        .unwrap_err();
    assert_eq!(err, CatalogError::NotFound(ProductId::new("p1")));
}

#[test]
fn test_promotion_toggle_leaves_original_price_unset() {
    let mut catalog = operator("s1");
    let product = catalog.toggle_promotion(&ProductId::new("p4")).unwrap();
    assert!(product.is_promotion);
    assert!(product.original_price.is_none());
}

#[test]
fn test_price_can_rise_once_promotion_is_off() {
    let mut catalog = operator("s1");
    let p1 = ProductId::new("p1");
    assert!(!catalog.toggle_promotion(&p1).unwrap().is_promotion);

    let product = catalog
        .update_product(&p1, ProductPatch::price(Decimal::new(3000, 2)))
        .unwrap();
    assert_eq!(product.price.amount, Decimal::new(3000, 2));
    assert!(product.shown_original_price().is_none());
}
