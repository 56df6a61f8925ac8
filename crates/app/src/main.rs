//! Market Catalog - headless boot.
//!
//! Loads configuration, starts telemetry, opens durable storage and
//! restores the previous session, then reports the screen the session
//! resolves to along with a summary of what that screen would show.
//!
//! # Architecture
//!
//! - `market-catalog-core` for the domain model
//! - `market-catalog-app` for catalog, session, routing and screen state
//! - Gemini `generateContent` for description suggestions (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;
use std::sync::Arc;

use market_catalog_app::catalog::CatalogStore;
use market_catalog_app::config::AppConfig;
use market_catalog_app::fixtures::CatalogSeed;
use market_catalog_app::router::{Screen, nav_items};
use market_catalog_app::screens::{CustomerExplorer, OperatorDashboard, share_code};
use market_catalog_app::session::SessionManager;
use market_catalog_app::storage::FileStorage;
use market_catalog_app::suggest::GeminiClient;
use market_catalog_app::telemetry;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Failed to load configuration: {e}");
            }
            return ExitCode::FAILURE;
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing(&config);

    let suggester = match GeminiClient::new(&config.suggestion) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!(error = %e, "Failed to build suggestion client");
            return ExitCode::FAILURE;
        }
    };
    info!(suggestion = ?config.suggestion, "Suggestion client ready");

    let storage = FileStorage::open(&config.storage_path);
    let mut session = SessionManager::new(storage);
    session.restore();

    let screen = session.screen();
    info!(
        screen = ?screen,
        page = session.page(),
        theme = %session.theme(),
        storage = %session.storage().path().display(),
        "Session resolved"
    );

    let Some(profile) = session.current() else {
        return ExitCode::SUCCESS;
    };

    let nav: Vec<_> = nav_items(profile.role()).iter().map(|item| item.label).collect();
    info!(
        profile_id = %profile.id,
        share_code = share_code(profile),
        nav = ?nav,
        "Logged in"
    );

    let catalog = CatalogStore::for_profile(CatalogSeed::demo(), profile);
    match screen {
        Screen::CustomerExplorer => {
            let explorer = CustomerExplorer::new();
            info!(
                stores = explorer.visible_stores(&catalog).len(),
                promotions = explorer.promotions(&catalog).len(),
                "Explorer ready"
            );
        }
        Screen::OperatorDashboard => {
            let dashboard = OperatorDashboard::new(catalog, suggester);
            info!(products = dashboard.visible_products().len(), "Dashboard ready");
        }
        Screen::Profile | Screen::FavoritesPlaceholder | Screen::Login => {}
    }

    ExitCode::SUCCESS
}
