//! Market Catalog application library.
//!
//! Everything above the domain model: the in-memory catalog, the session and
//! its durable storage, view routing, per-screen state and the description
//! suggestion client. The `market-catalog` binary wires these together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod router;
pub mod screens;
pub mod session;
pub mod storage;
pub mod suggest;
pub mod telemetry;
pub mod theme;

pub use error::{AppError, ErrorKind, Result};
