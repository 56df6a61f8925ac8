//! Invariant violations shared by the core and the application layer.

use crate::types::ProfileId;

/// An operation was attempted in a state that correct view gating never
/// produces: the wrong role, or a profile that is not the logged-in one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    /// A customer-only operation was called with a store account.
    #[error("operation requires a customer profile")]
    NotACustomer,

    /// A store-operator-only operation was called without an operated store.
    #[error("operation requires a supermarket profile")]
    NotAnOperator,

    /// A profile update tried to replace a different identity.
    #[error("profile {attempted} cannot replace logged-in profile {current}")]
    IdentityMismatch {
        /// The logged-in profile.
        current: ProfileId,
        /// The profile passed to the update.
        attempted: ProfileId,
    },

    /// A profile update tried to change the role or the operated store,
    /// both of which are fixed at login.
    #[error("profile {profile} cannot change its role or operated store")]
    AccountChanged {
        /// The logged-in profile.
        profile: ProfileId,
    },

    /// A profile update arrived while nobody is logged in.
    #[error("no active session")]
    NoSession,
}
