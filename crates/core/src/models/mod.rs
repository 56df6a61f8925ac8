//! Domain models for the catalog.
//!
//! These are the records the catalog store, session manager and screens pass
//! around. Field names serialize in camelCase to match the persisted profile
//! shape.

pub mod product;
pub mod profile;
pub mod store;

pub use product::Product;
pub use profile::{Account, FavoriteStores, Role, UserProfile};
pub use store::Store;
