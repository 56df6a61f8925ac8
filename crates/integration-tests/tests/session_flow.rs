//! Session lifecycle over file-backed storage.

#![allow(clippy::unwrap_used)]

use market_catalog_app::router::Screen;
use market_catalog_app::session::{LoginForm, SessionManager};
use market_catalog_app::storage::{FileStorage, KeyValueStore, keys};
use market_catalog_app::theme::Theme;
use market_catalog_core::{Account, InvalidStateError, Role, StoreId, UserProfile, favorites};
use market_catalog_integration_tests::{logged_in, temp_storage_path};

// =============================================================================
// Role Exclusivity
// =============================================================================

#[test]
fn test_login_profiles_are_role_exclusive() {
    for role in [Role::Customer, Role::Supermarket] {
        let session = logged_in(role, "");
        let profile = session.current().unwrap();

        assert_eq!(profile.role(), role);
        assert_ne!(
            profile.store_id().is_some(),
            profile.favorites().is_some(),
            "exactly one of storeId/favorites for {role:?}"
        );
    }
}

#[test]
fn test_persisted_json_shape() {
    let session = logged_in(Role::Supermarket, "loja@central.com");
    let raw = session.storage().get(keys::CURRENT_USER).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["role"], "SUPERMARKET");
    assert_eq!(json["storeId"], "s1");
    assert_eq!(json["email"], "loja@central.com");
    assert!(json.get("favorites").is_none());
}

// =============================================================================
// Restore / Logout
// =============================================================================

#[test]
fn test_session_survives_restart() {
    let path = temp_storage_path();
    let profile = LoginForm::new(Role::Customer, "cliente@exemplo.com")
        .into_profile()
        .unwrap();

    {
        let mut session = SessionManager::new(FileStorage::open(&path));
        session.login(profile.clone());
        session.toggle_theme();
    }

    let mut session = SessionManager::new(FileStorage::open(&path));
    assert_eq!(session.restore(), Some(&profile));
    assert_eq!(session.theme(), Theme::Dark);
    assert_eq!(session.screen(), Screen::CustomerExplorer);
}

#[test]
fn test_malformed_storage_restores_logged_out() {
    let path = temp_storage_path();
    {
        let mut storage = FileStorage::open(&path);
        storage.set(keys::CURRENT_USER, r#"{"role":"ADMIN"}"#).unwrap();
    }

    let mut session = SessionManager::new(FileStorage::open(&path));
    assert!(session.restore().is_none());
    assert_eq!(session.screen(), Screen::Login);
}

#[test]
fn test_logout_clears_profile_but_keeps_theme() {
    let path = temp_storage_path();
    {
        let mut session = SessionManager::new(FileStorage::open(&path));
        session.login(LoginForm::new(Role::Supermarket, "").into_profile().unwrap());
        session.toggle_theme();
        session.logout();
    }

    let reopened = FileStorage::open(&path);
    assert!(reopened.get(keys::CURRENT_USER).is_none());
    assert_eq!(reopened.get(keys::THEME).as_deref(), Some("dark"));

    let mut session = SessionManager::new(reopened);
    assert!(session.restore().is_none());
    assert_eq!(session.theme(), Theme::Dark);
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_storage_reflects_last_update() {
    let mut session = logged_in(Role::Customer, "");
    let profile = session.current().unwrap().clone();

    let once = favorites::toggle(&profile, &StoreId::new("s1")).unwrap();
    session.update(once).unwrap();
    let twice = favorites::toggle(session.current().unwrap(), &StoreId::new("s3")).unwrap();
    session.update(twice.clone()).unwrap();

    let stored: UserProfile =
        serde_json::from_str(&session.storage().get(keys::CURRENT_USER).unwrap()).unwrap();
    assert_eq!(stored, twice);
    assert_eq!(stored.favorites().unwrap().len(), 2);
}

#[test]
fn test_cross_identity_update_rejected() {
    let mut session = logged_in(Role::Customer, "");
    let before = session.storage().get(keys::CURRENT_USER);

    let stranger = LoginForm::new(Role::Customer, "").into_profile().unwrap();
    let err = session.update(stranger).unwrap_err();

    assert!(matches!(err, InvalidStateError::IdentityMismatch { .. }));
    assert_eq!(session.storage().get(keys::CURRENT_USER), before);
}

#[test]
fn test_update_cannot_turn_customer_into_operator() {
    let mut session = logged_in(Role::Customer, "");
    let before = session.storage().get(keys::CURRENT_USER);
    let customer = session.current().unwrap().clone();

    let operator = UserProfile {
        account: Account::Supermarket {
            store_id: StoreId::new("s2"),
        },
        ..customer.clone()
    };
    let err = session.update(operator).unwrap_err();

    assert!(matches!(err, InvalidStateError::AccountChanged { .. }));
    assert_eq!(session.current().unwrap().role(), Role::Customer);
    assert_eq!(session.screen(), Screen::CustomerExplorer);
    assert_eq!(session.storage().get(keys::CURRENT_USER), before);
}

#[test]
fn test_favorite_toggle_is_involution() {
    let session = logged_in(Role::Customer, "");
    let profile = session.current().unwrap();
    let store = StoreId::new("s2");

    let twice = favorites::toggle(&favorites::toggle(profile, &store).unwrap(), &store).unwrap();
    assert_eq!(&twice, profile);
}

#[test]
fn test_favorite_toggle_rejects_store_account() {
    let session = logged_in(Role::Supermarket, "");
    let err = favorites::toggle(session.current().unwrap(), &StoreId::new("s2")).unwrap_err();
    assert_eq!(err, InvalidStateError::NotACustomer);
}
