//! Unified error handling with Sentry integration.
//!
//! Every user-triggered action returns `Result<T, AppError>`. The caller
//! recovers at the action boundary: it calls [`AppError::report`] and
//! shows [`AppError::user_message`]. A failed action never leaves partial
//! state behind.

use market_catalog_core::{EmailError, HoursError, InvalidStateError};
use thiserror::Error;

use crate::catalog::{CatalogError, ValidationError};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Role or identity mismatch; only reachable through a routing bug.
    #[error("Invalid state: {0}")]
    InvalidState(#[from] InvalidStateError),

    /// Profile form carried a malformed email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Profile form carried malformed business hours.
    #[error("Invalid hours: {0}")]
    InvalidHours(#[from] HoursError),
}

/// Coarse error taxonomy used for presentation and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    InvalidState,
}

impl AppError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Catalog(CatalogError::Validation(_))
            | Self::InvalidEmail(_)
            | Self::InvalidHours(_) => ErrorKind::Validation,
            Self::Catalog(CatalogError::NotFound(_)) => ErrorKind::NotFound,
            Self::Catalog(CatalogError::InvalidState(_)) | Self::InvalidState(_) => {
                ErrorKind::InvalidState
            }
        }
    }

    /// Message safe to show inline next to the form or action.
    ///
    /// Invariant violations are not explained to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Catalog(CatalogError::Validation(err)) => validation_message(err),
            Self::Catalog(CatalogError::NotFound(_)) => "Produto não encontrado.".to_string(),
            Self::InvalidEmail(_) => "E-mail inválido.".to_string(),
            Self::InvalidHours(_) => "Horário inválido, use HH:MM.".to_string(),
            Self::Catalog(CatalogError::InvalidState(_)) | Self::InvalidState(_) => {
                "Ação indisponível.".to_string()
            }
        }
    }

    /// Log the error, capturing invariant violations to Sentry.
    pub fn report(&self) {
        if self.kind() == ErrorKind::InvalidState {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Action aborted"
            );
        } else {
            tracing::warn!(error = %self, kind = ?self.kind(), "Action rejected");
        }
    }
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingName => "Informe o nome do produto.".to_string(),
        ValidationError::NegativePrice => "O preço não pode ser negativo.".to_string(),
        ValidationError::UnknownCategory(_) => "Categoria inválida.".to_string(),
        ValidationError::MissingStore | ValidationError::ForeignStore { .. } => {
            "Produto sem mercado associado.".to_string()
        }
        ValidationError::OriginalBelowPrice => {
            "O preço original deve ser maior ou igual ao preço.".to_string()
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from the logged-in profile.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context on logout.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for a user action.
///
/// ```rust,ignore
/// add_breadcrumb("catalog", "Deleted product", Some(&[("product_id", "p1")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use market_catalog_core::{ProductId, ProfileId};

    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = AppError::from(CatalogError::Validation(ValidationError::NegativePrice));
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = AppError::from(CatalogError::NotFound(ProductId::new("p9")));
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = AppError::from(CatalogError::InvalidState(InvalidStateError::NotAnOperator));
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        let err = AppError::from(InvalidStateError::IdentityMismatch {
            current: ProfileId::new("a"),
            attempted: ProfileId::new("b"),
        });
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        let err = AppError::from(EmailError::Empty);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_user_message_hides_invariant_details() {
        let err = AppError::from(InvalidStateError::IdentityMismatch {
            current: ProfileId::new("secret-a"),
            attempted: ProfileId::new("secret-b"),
        });
        let message = err.user_message();
        assert!(!message.contains("secret"));
    }

    #[test]
    fn test_display() {
        let err = AppError::from(CatalogError::NotFound(ProductId::new("p1")));
        assert_eq!(err.to_string(), "Catalog error: product not found: p1");
    }

    #[test]
    fn test_report_does_not_panic_without_sentry() {
        AppError::from(InvalidStateError::NotACustomer).report();
        AppError::from(CatalogError::NotFound(ProductId::new("p1"))).report();
    }
}
