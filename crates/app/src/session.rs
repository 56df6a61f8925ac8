//! Session lifecycle: who is logged in, which page they are on, and the
//! theme preference.
//!
//! A [`SessionManager`] owns its [`KeyValueStore`]. The persisted profile
//! always mirrors the last `login` or `update`; `logout` erases it. Storage
//! write failures are logged and swallowed, leaving the in-memory session
//! authoritative.

use market_catalog_core::{
    Email, EmailError, InvalidStateError, ProfileId, Role, StoreId, UserProfile,
};
use tracing::{debug, info, warn};

use crate::error::{add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::router::{self, Screen, pages};
use crate::storage::{KeyValueStore, StorageError, keys};
use crate::theme::Theme;

/// Name given to customers by the simulated login.
pub const DEFAULT_CUSTOMER_NAME: &str = "João Silva";

/// Name given to store accounts by the simulated login.
pub const DEFAULT_OPERATOR_NAME: &str = "Supermercado Central";

/// Store every simulated operator login manages.
pub const DEFAULT_OPERATOR_STORE: &str = "s1";

/// Simulated login form. No password is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub role: Role,
    pub email: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            role,
            email: email.into(),
        }
    }

    /// Build the profile the login creates.
    ///
    /// A blank email falls back to the demo address.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if a non-blank email is malformed.
    pub fn into_profile(self) -> Result<UserProfile, EmailError> {
        let email = if self.email.trim().is_empty() {
            Email::demo()
        } else {
            Email::parse(&self.email)?
        };

        let id = ProfileId::generate();
        Ok(match self.role {
            Role::Customer => UserProfile::customer(id, DEFAULT_CUSTOMER_NAME, email),
            Role::Supermarket => UserProfile::supermarket(
                id,
                DEFAULT_OPERATOR_NAME,
                email,
                StoreId::new(DEFAULT_OPERATOR_STORE),
            ),
        })
    }
}

/// The single in-process session.
#[derive(Debug)]
pub struct SessionManager<S> {
    storage: S,
    current: Option<UserProfile>,
    page: String,
    theme: Theme,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// A logged-out session over `storage`. Call [`Self::restore`] to pick up
    /// a persisted session.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
            page: pages::LOGIN.to_string(),
            theme: Theme::default(),
        }
    }

    /// Reload the theme and the persisted profile.
    ///
    /// A missing or malformed profile leaves the session logged out.
    pub fn restore(&mut self) -> Option<&UserProfile> {
        self.theme = Theme::from_stored(self.storage.get(keys::THEME).as_deref());

        let restored = self.storage.get(keys::CURRENT_USER).and_then(|raw| {
            serde_json::from_str::<UserProfile>(&raw)
                .inspect_err(|e| warn!(error = %e, "Discarding malformed stored profile"))
                .ok()
        });

        match restored {
            Some(profile) => {
                info!(profile_id = %profile.id, role = ?profile.role(), "Session restored");
                set_sentry_user(&profile.id, Some(profile.email.as_str()));
                self.page = router::landing_page(profile.role()).to_string();
                self.current = Some(profile);
            }
            None => {
                debug!("No stored session");
                self.current = None;
                self.page = pages::LOGIN.to_string();
            }
        }

        self.current.as_ref()
    }

    /// Install `profile`, persist it and go to the role's landing page.
    pub fn login(&mut self, profile: UserProfile) {
        info!(profile_id = %profile.id, role = ?profile.role(), "Logged in");
        set_sentry_user(&profile.id, Some(profile.email.as_str()));

        self.persist_profile(&profile);
        self.page = router::landing_page(profile.role()).to_string();
        self.current = Some(profile);
    }

    /// Clear the session and its persisted copy. The theme is kept.
    pub fn logout(&mut self) {
        if let Some(profile) = self.current.take() {
            info!(profile_id = %profile.id, "Logged out");
        }
        if let Err(e) = self.storage.remove(keys::CURRENT_USER) {
            warn!(error = %e, "Failed to erase stored profile");
        }
        clear_sentry_user();
        self.page = pages::LOGIN.to_string();
    }

    /// Replace the current profile with an edited copy of it.
    ///
    /// # Errors
    ///
    /// `NoSession` when logged out, `IdentityMismatch` when `profile` is a
    /// different user, `AccountChanged` when it carries another role or
    /// another operated store.
    pub fn update(&mut self, profile: UserProfile) -> Result<(), InvalidStateError> {
        let current = self.current.as_ref().ok_or(InvalidStateError::NoSession)?;
        if current.id != profile.id {
            return Err(InvalidStateError::IdentityMismatch {
                current: current.id.clone(),
                attempted: profile.id,
            });
        }
        if current.role() != profile.role() || current.store_id() != profile.store_id() {
            return Err(InvalidStateError::AccountChanged { profile: profile.id });
        }

        debug!(profile_id = %profile.id, "Profile updated");
        self.persist_profile(&profile);
        self.current = Some(profile);
        Ok(())
    }

    #[must_use]
    pub const fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Set the requested page key. Unknown keys are resolved by the router.
    pub fn navigate(&mut self, page: impl Into<String>) {
        self.page = page.into();
        add_breadcrumb("navigation", "Navigated", Some(&[("page", self.page.as_str())]));
    }

    /// Screen for the current session and page.
    #[must_use]
    pub fn screen(&self) -> Screen {
        router::resolve(self.current.as_ref(), &self.page)
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch theme and persist the choice.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.storage.set(keys::THEME, self.theme.as_str()) {
            warn!(error = %e, theme = %self.theme, "Failed to persist theme");
        }
        self.theme
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn persist_profile(&mut self, profile: &UserProfile) {
        let result = serde_json::to_string(profile)
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.set(keys::CURRENT_USER, &raw));
        if let Err(e) = result {
            warn!(profile_id = %profile.id, error = %e, "Failed to persist profile");
        }
    }
}
