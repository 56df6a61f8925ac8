//! Per-screen state.
//!
//! Each screen keeps only what its view needs between user actions and
//! delegates to the catalog and the session for everything else. Actions
//! return [`AppError`](crate::error::AppError) for the caller to report.

mod dashboard;
mod explorer;
mod profile;

pub use dashboard::{OperatorDashboard, ProductEditor, SuggestionRequest};
pub use explorer::CustomerExplorer;
pub use profile::{
    CUSTOMER_SHARE_CODE, DEFAULT_AVATAR_URL, DEFAULT_BANNER_URL, DEFAULT_STORE_CODE,
    ProfileEditor, ProfileForm, share_code,
};
