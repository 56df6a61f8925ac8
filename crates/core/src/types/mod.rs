//! Core types for the market catalog.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod hours;
pub mod id;
pub mod price;
pub mod region;

pub use category::{Category, CategoryFilter, UnknownCategory};
pub use email::{Email, EmailError};
pub use hours::{BusinessHours, HoursError};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use region::{Region, RegionFilter, UnknownRegion};
