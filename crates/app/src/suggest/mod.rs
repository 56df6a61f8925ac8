//! Product description suggestions.
//!
//! Suggestions are best-effort enrichment for the product editor. A
//! [`DescriptionSuggester`] always resolves to some text: failures become
//! [`FALLBACK_DESCRIPTION`], an empty answer becomes [`EMPTY_DESCRIPTION`].

mod error;
mod gemini;
mod types;

use std::future::Future;

use market_catalog_core::Category;

pub use error::{ApiError, ApiErrorResponse, SuggestionError};
pub use gemini::GeminiClient;
pub use types::{GenerateContentRequest, GenerateContentResponse};

/// Text used when a suggestion could not be obtained.
pub const FALLBACK_DESCRIPTION: &str = "Um produto essencial para sua casa.";

/// Text used when the service answered with nothing.
pub const EMPTY_DESCRIPTION: &str = "Descrição não disponível.";

/// Source of suggested product descriptions.
pub trait DescriptionSuggester: Send + Sync + 'static {
    /// Suggest a short description for a product. Never fails.
    fn suggest(&self, name: &str, category: Category) -> impl Future<Output = String> + Send;
}

/// Instruction sent to the text model.
#[must_use]
pub fn prompt(name: &str, category: Category) -> String {
    format!(
        "Escreva uma descrição curta, vendedora e profissional para um produto de supermercado \
         chamado \"{name}\" na categoria \"{category}\". Máximo de 20 palavras."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_name_and_category() {
        let text = prompt("Café Gourmet 500g", Category::Mercearia);
        assert!(text.contains("chamado \"Café Gourmet 500g\""));
        assert!(text.contains("na categoria \"Mercearia\""));
        assert!(text.ends_with("Máximo de 20 palavras."));
    }
}
