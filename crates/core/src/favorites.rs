//! Favorite-store toggling for customer profiles.
//!
//! Both functions are pure: they never touch storage. The session manager
//! persists the returned profile through its `update` operation.

use crate::error::InvalidStateError;
use crate::models::{Account, UserProfile};
use crate::types::StoreId;

/// Follow `store_id` (appended last) if the customer does not follow it yet,
/// unfollow it otherwise. Returns the new profile; `profile` is left untouched.
///
/// Applying the same toggle twice yields the original profile.
///
/// # Errors
///
/// Returns [`InvalidStateError::NotACustomer`] for store accounts.
pub fn toggle(profile: &UserProfile, store_id: &StoreId) -> Result<UserProfile, InvalidStateError> {
    let mut next = profile.clone();
    match &mut next.account {
        Account::Customer { favorites } => {
            if !favorites.remove(store_id) {
                favorites.insert(store_id.clone());
            }
        }
        Account::Supermarket { .. } => return Err(InvalidStateError::NotACustomer),
    }
    Ok(next)
}

/// Whether the profile follows `store_id`. Always false for store accounts.
#[must_use]
pub fn is_favorite(profile: &UserProfile, store_id: &StoreId) -> bool {
    profile
        .favorites()
        .is_some_and(|favorites| favorites.contains(store_id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Email, ProfileId};

    fn customer() -> UserProfile {
        UserProfile::customer(ProfileId::new("u1"), "João Silva", Email::demo())
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let s1 = StoreId::new("s1");
        let followed = toggle(&customer(), &s1).unwrap();
        assert!(is_favorite(&followed, &s1));

        let unfollowed = toggle(&followed, &s1).unwrap();
        assert!(!is_favorite(&unfollowed, &s1));
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let base = toggle(&customer(), &StoreId::new("s1")).unwrap();
        let base = toggle(&base, &StoreId::new("s3")).unwrap();

        for id in ["s1", "s2", "s3"] {
            let id = StoreId::new(id);
            let twice = toggle(&toggle(&base, &id).unwrap(), &id).unwrap();
            assert_eq!(twice, base);
        }
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let profile = customer();
        let _ = toggle(&profile, &StoreId::new("s2")).unwrap();
        assert_eq!(profile.favorites().map(|f| f.len()), Some(0));
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let s2 = StoreId::new("s2");
        let mut profile = customer();
        for _ in 0..5 {
            profile = toggle(&profile, &s2).unwrap();
        }
        assert_eq!(profile.favorites().map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_toggle_appends_in_follow_order() {
        let profile = toggle(&customer(), &StoreId::new("s3")).unwrap();
        let profile = toggle(&profile, &StoreId::new("s1")).unwrap();

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["favorites"], serde_json::json!(["s3", "s1"]));
    }

    #[test]
    fn test_toggle_rejects_store_accounts() {
        let store = UserProfile::supermarket(
            ProfileId::new("u2"),
            "Supermercado Central",
            Email::demo(),
            StoreId::new("s1"),
        );
        assert_eq!(
            toggle(&store, &StoreId::new("s2")),
            Err(InvalidStateError::NotACustomer)
        );
        assert!(!is_favorite(&store, &StoreId::new("s1")));
    }
}
