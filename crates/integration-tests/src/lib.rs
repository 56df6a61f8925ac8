//! Integration tests for Market Catalog.
//!
//! Cross-crate scenarios: a session over real storage, the catalog it
//! scopes, the router, and the screens that drive them.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p market-catalog-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flow` - login, restore, update and logout over file storage
//! - `catalog_operations` - store search and product mutations
//! - `routing` - screen resolution for each session state
//! - `suggestions` - description suggestions and their cancellation

use std::path::PathBuf;

use market_catalog_app::session::{LoginForm, SessionManager};
use market_catalog_app::storage::MemoryStorage;
use market_catalog_app::suggest::DescriptionSuggester;
use market_catalog_core::{Category, Role};
use tokio::sync::Notify;

/// A fresh path under the system temp directory.
#[must_use]
pub fn temp_storage_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("market-catalog-it-{}", uuid::Uuid::new_v4().simple()))
        .join("storage.json")
}

/// A session logged in through the simulated login form.
///
/// # Panics
///
/// Panics if the email is malformed.
#[must_use]
pub fn logged_in(role: Role, email: &str) -> SessionManager<MemoryStorage> {
    let mut session = SessionManager::new(MemoryStorage::new());
    #[allow(clippy::expect_used)]
    let profile = LoginForm::new(role, email)
        .into_profile()
        .expect("valid login email");
    session.login(profile);
    session
}

/// Suggester that holds every answer until released.
#[derive(Debug, Default)]
pub struct GatedSuggester {
    pub release: Notify,
}

impl DescriptionSuggester for GatedSuggester {
    async fn suggest(&self, name: &str, category: Category) -> String {
        self.release.notified().await;
        format!("{name} ({category}), qualidade garantida.")
    }
}
