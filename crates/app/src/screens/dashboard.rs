//! Operator dashboard: product list, product editor and description
//! suggestions.
//!
//! A suggestion runs as a spawned task while the editor stays usable. Each
//! result is tagged with the editor generation it was requested for; closing
//! or reopening the editor bumps the generation and aborts the task, and any
//! result that still arrives for an older generation is dropped.

use std::sync::Arc;

use market_catalog_core::{Category, CategoryFilter, InvalidStateError, Product, ProductId};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::catalog::{
    CatalogError, CatalogScope, CatalogStore, DeleteIntent, ProductDraft, ProductPatch,
    ValidationError,
};
use crate::error::Result;
use crate::suggest::DescriptionSuggester;

/// Product being created or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEditor {
    /// `None` while creating a new product.
    pub product_id: Option<ProductId>,
    pub draft: ProductDraft,
}

/// Outcome of [`OperatorDashboard::request_suggestion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRequest {
    Started,
    /// A suggestion for this editor is already running.
    AlreadyPending,
    /// The editor is closed or the product has no name yet.
    NotReady,
}

#[derive(Debug)]
struct SuggestionReady {
    generation: u64,
    text: String,
}

#[derive(Debug)]
struct PendingSuggestion {
    generation: u64,
    task: JoinHandle<()>,
}

/// Dashboard state for one session.
pub struct OperatorDashboard<S> {
    catalog: CatalogStore,
    category: CategoryFilter,
    editor: Option<ProductEditor>,
    generation: u64,
    suggester: Arc<S>,
    pending: Option<PendingSuggestion>,
    ready_tx: mpsc::UnboundedSender<SuggestionReady>,
    ready_rx: mpsc::UnboundedReceiver<SuggestionReady>,
}

impl<S> std::fmt::Debug for OperatorDashboard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorDashboard")
            .field("category", &self.category)
            .field("editor", &self.editor)
            .field("generation", &self.generation)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: DescriptionSuggester> OperatorDashboard<S> {
    #[must_use]
    pub fn new(catalog: CatalogStore, suggester: Arc<S>) -> Self {
        let (ready_tx, ready_rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            category: CategoryFilter::All,
            editor: None,
            generation: 0,
            suggester,
            pending: None,
            ready_tx,
            ready_rx,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn category(&self) -> CategoryFilter {
        self.category
    }

    pub const fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Products in scope that pass the category filter, newest first.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog
            .products()
            .iter()
            .filter(|p| self.category.matches(p.category))
            .collect()
    }

    pub fn toggle_promotion(&mut self, id: &ProductId) -> Result<&Product> {
        Ok(self.catalog.toggle_promotion(id)?)
    }

    /// First step of a delete; show a confirmation for the returned intent.
    pub fn request_delete(&self, id: &ProductId) -> Result<DeleteIntent> {
        Ok(self.catalog.request_delete(id)?)
    }

    /// Second step of a delete, after the operator confirmed.
    pub fn confirm_delete(&mut self, intent: DeleteIntent) -> Result<Product> {
        Ok(self.catalog.delete_product(intent)?)
    }

    // =========================================================================
    // Editor
    // =========================================================================

    #[must_use]
    pub const fn editor(&self) -> Option<&ProductEditor> {
        self.editor.as_ref()
    }

    /// Draft of the open editor, for form input.
    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        self.editor.as_mut().map(|editor| &mut editor.draft)
    }

    /// Open the editor on a blank product for the operated store.
    pub fn open_new(&mut self) -> Result<()> {
        let CatalogScope::Owned(store_id) = self.catalog.scope() else {
            return Err(InvalidStateError::NotAnOperator.into());
        };
        let draft = ProductDraft::blank(store_id.clone());
        self.open(ProductEditor {
            product_id: None,
            draft,
        });
        Ok(())
    }

    /// Open the editor on an existing product.
    pub fn open_edit(&mut self, id: &ProductId) -> Result<()> {
        let product = self
            .catalog
            .product(id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        let draft = ProductDraft::from_product(product);
        self.open(ProductEditor {
            product_id: Some(id.clone()),
            draft,
        });
        Ok(())
    }

    /// Close the editor, discarding the draft and any running suggestion.
    pub fn close_editor(&mut self) {
        self.editor = None;
        self.next_generation();
    }

    /// Create or update from the open editor.
    ///
    /// On success the editor closes and the saved product's id is returned.
    /// On failure the editor stays open with the draft intact. Returns
    /// `Ok(None)` when no editor is open.
    pub fn save(&mut self) -> Result<Option<ProductId>> {
        let Some(editor) = &self.editor else {
            return Ok(None);
        };

        let draft = editor.draft.clone();
        let saved = match &editor.product_id {
            Some(id) => self
                .catalog
                .update_product(id, ProductPatch::replace_with(draft))?
                .id
                .clone(),
            None => self.catalog.create_product(draft)?.id.clone(),
        };

        self.close_editor();
        Ok(Some(saved))
    }

    fn open(&mut self, editor: ProductEditor) {
        self.next_generation();
        self.editor = Some(editor);
    }

    fn next_generation(&mut self) {
        self.generation += 1;
        if let Some(pending) = self.pending.take() {
            debug!(generation = pending.generation, "Cancelling description suggestion");
            pending.task.abort();
        }
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Whether a suggestion for the open editor is running.
    #[must_use]
    pub const fn is_suggesting(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a description suggestion for the open editor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn request_suggestion(&mut self) -> Result<SuggestionRequest> {
        let Some(editor) = &self.editor else {
            return Ok(SuggestionRequest::NotReady);
        };
        if self.pending.is_some() {
            return Ok(SuggestionRequest::AlreadyPending);
        }

        let name = editor.draft.name.trim().to_owned();
        if name.is_empty() {
            return Ok(SuggestionRequest::NotReady);
        }
        let category = editor
            .draft
            .category
            .parse::<Category>()
            .map_err(|e| CatalogError::from(ValidationError::UnknownCategory(e.0)))?;

        let generation = self.generation;
        let suggester = Arc::clone(&self.suggester);
        let ready_tx = self.ready_tx.clone();

        debug!(generation, product = %name, "Requesting description suggestion");
        let task = tokio::spawn(async move {
            let text = suggester.suggest(&name, category).await;
            if ready_tx.send(SuggestionReady { generation, text }).is_err() {
                debug!(generation, "Dashboard gone, dropping suggestion");
            }
        });

        self.pending = Some(PendingSuggestion { generation, task });
        Ok(SuggestionRequest::Started)
    }

    /// Apply a finished suggestion without waiting.
    ///
    /// Returns `true` if the open editor's description was replaced.
    pub fn try_apply_suggestion(&mut self) -> bool {
        let mut applied = false;
        while let Ok(ready) = self.ready_rx.try_recv() {
            applied |= self.apply(ready);
        }
        applied
    }

    /// Wait for the running suggestion and apply it.
    ///
    /// Returns `false` immediately if nothing is running for the open editor,
    /// and `false` once the task ends if it died without a result.
    pub async fn settle_suggestion(&mut self) -> bool {
        if self.try_apply_suggestion() {
            return true;
        }
        let Some(PendingSuggestion { generation, task }) = self.pending.take() else {
            return false;
        };
        if let Err(e) = task.await {
            warn!(generation, error = %e, "Description suggestion task failed");
        }
        self.try_apply_suggestion()
    }

    fn apply(&mut self, ready: SuggestionReady) -> bool {
        if ready.generation != self.generation {
            debug!(
                generation = ready.generation,
                current = self.generation,
                "Discarding stale suggestion"
            );
            return false;
        }
        let Some(editor) = &mut self.editor else {
            return false;
        };
        editor.draft.description = ready.text;
        self.pending = None;
        true
    }
}
