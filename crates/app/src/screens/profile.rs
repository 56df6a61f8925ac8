//! Profile editor shared by both roles.

use market_catalog_core::{BusinessHours, Email, InvalidStateError, Role, UserProfile};
use tracing::info;

use crate::error::Result;
use crate::session::SessionManager;
use crate::storage::KeyValueStore;

pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1542838132-92c53300491e?auto=format&fit=crop&q=80&w=200";
pub const DEFAULT_BANNER_URL: &str =
    "https://images.unsplash.com/photo-1578916171728-46686eac8d58?auto=format&fit=crop&q=80&w=1200";
pub const DEFAULT_OPEN_HOUR: &str = "08:00";
pub const DEFAULT_CLOSE_HOUR: &str = "22:00";

/// Share code shown for store accounts without their own code.
pub const DEFAULT_STORE_CODE: &str = "MC-778";
/// Share code shown for customers.
pub const CUSTOMER_SHARE_CODE: &str = "USER-992";

/// Editable profile fields, as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub banner_url: String,
    pub open_hour: String,
    pub close_hour: String,
}

impl ProfileForm {
    /// Seed the form from `profile`, filling gaps with defaults.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        let (open_hour, close_hour) = profile.business_hours.as_ref().map_or_else(
            || (DEFAULT_OPEN_HOUR.to_string(), DEFAULT_CLOSE_HOUR.to_string()),
            |hours| (hours.open_label(), hours.close_label()),
        );

        Self {
            name: profile.name.clone(),
            email: profile.email.to_string(),
            avatar_url: profile
                .avatar_url
                .clone()
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            banner_url: profile
                .banner_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BANNER_URL.to_string()),
            open_hour,
            close_hour,
        }
    }

    /// The edited copy of `profile`. Hours are kept only for store accounts.
    ///
    /// # Errors
    ///
    /// `InvalidEmail` or `InvalidHours` for malformed input.
    pub fn apply(&self, profile: &UserProfile) -> Result<UserProfile> {
        let email = Email::parse(&self.email)?;
        let business_hours = match profile.role() {
            Role::Supermarket => Some(BusinessHours::parse(&self.open_hour, &self.close_hour)?),
            Role::Customer => None,
        };

        Ok(UserProfile {
            name: self.name.trim().to_owned(),
            email,
            avatar_url: Some(self.avatar_url.clone()),
            banner_url: Some(self.banner_url.clone()),
            business_hours,
            ..profile.clone()
        })
    }
}

/// Profile screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    pub form: ProfileForm,
}

impl ProfileEditor {
    #[must_use]
    pub fn new(profile: &UserProfile) -> Self {
        Self {
            form: ProfileForm::from_profile(profile),
        }
    }

    /// Validate the form and store the result through the session.
    ///
    /// # Errors
    ///
    /// Form validation errors, or `InvalidState` when logged out.
    pub fn submit<S: KeyValueStore>(&self, session: &mut SessionManager<S>) -> Result<()> {
        let current = session.current().ok_or(InvalidStateError::NoSession)?;
        let updated = self.form.apply(current)?;
        let profile_id = updated.id.clone();
        session.update(updated)?;
        info!(profile_id = %profile_id, "Profile saved");
        Ok(())
    }
}

/// Code other users type to find this profile.
#[must_use]
pub fn share_code(profile: &UserProfile) -> &str {
    match profile.role() {
        Role::Supermarket => profile.unique_code.as_deref().unwrap_or(DEFAULT_STORE_CODE),
        Role::Customer => CUSTOMER_SHARE_CODE,
    }
}
