//! Market Catalog Core - Domain model shared by the catalog application.
//!
//! This crate provides the types every other component is written against:
//! - stores and their products
//! - user profiles with a role-keyed account (customer or supermarket)
//! - the favorite-store toggle used by customers
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage, no HTTP clients. Session handling, the catalog store and the
//! view router live in `market-catalog-app`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails, categories, regions and hours
//! - [`models`] - `Product`, `Store`, `UserProfile`
//! - [`favorites`] - Favorite-store toggling for customer profiles
//! - [`error`] - Invariant violations shared across crates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod favorites;
pub mod models;
pub mod types;

pub use error::InvalidStateError;
pub use models::*;
pub use types::*;
