//! Session aggregate.
//!
//! A `Session` owns every piece of mutable state of one running instance:
//! the list query, the comparison selection, the current view and the chat.
//! The catalog is shared read-only. Nothing here is persisted; dropping the
//! session discards it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::assistant::{AssistantGateway, AssistantPanel, ChatEntry, SubmitRejected};
use crate::catalog::{CatalogStore, Product};
use crate::comparison::{Comparison, Selection, ToggleOutcome};
use crate::error::{MotoError, Result};
use crate::filter::{CatalogQuery, CategoryFilter};
use crate::view::{Destination, NavigationError, Screen, View, ViewAction, ViewController};

pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: Arc<CatalogStore>,
    query: CatalogQuery,
    selection: Selection,
    view: ViewController,
    assistant: AssistantPanel,
}

impl Session {
    /// Starts a session on the list screen with no filter, an empty
    /// comparison and a greeting in the chat.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        let id = Uuid::new_v4();
        tracing::info!("[Session] Started {} over {} products", id, catalog.len());
        Self {
            id,
            started_at: Utc::now(),
            catalog,
            query: CatalogQuery::default(),
            selection: Selection::new(),
            view: ViewController::new(),
            assistant: AssistantPanel::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    // ============================================================================
    // List screen
    // ============================================================================

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    /// Products passing the current query, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.query.apply(&self.catalog)
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    pub fn view(&self) -> &View {
        self.view.view()
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn navigate(&mut self, destination: Destination) -> Screen {
        self.view.navigate(destination)
    }

    pub fn dispatch(&mut self, action: ViewAction) -> std::result::Result<Screen, NavigationError> {
        self.view.dispatch(&self.catalog, action)
    }

    /// The product shown on the detail screen, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.view
            .selected_product()
            .and_then(|id| self.catalog.get(id))
    }

    // ============================================================================
    // Comparison
    // ============================================================================

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggles a catalog product in or out of the comparison set.
    pub fn toggle_compare(&mut self, product_id: &str) -> Result<ToggleOutcome> {
        if !self.catalog.contains(product_id) {
            return Err(MotoError::not_found("product", product_id));
        }
        let outcome = self.selection.toggle(product_id);
        tracing::debug!(
            "[Compare] {:?} '{}' ({} selected)",
            outcome,
            product_id,
            self.selection.len()
        );
        Ok(outcome)
    }

    pub fn clear_comparison(&mut self) {
        self.selection.clear();
    }

    pub fn comparison(&self) -> Comparison<'_> {
        Comparison::build(&self.catalog, &self.selection)
    }

    /// Count shown on the floating compare shortcut.
    ///
    /// Hidden on the compare and guide screens and while nothing is selected.
    pub fn compare_badge(&self) -> Option<usize> {
        match self.screen() {
            Screen::Compare | Screen::Guide => None,
            _ if self.selection.is_empty() => None,
            _ => Some(self.selection.len()),
        }
    }

    // ============================================================================
    // Advisor
    // ============================================================================

    pub fn assistant(&self) -> &AssistantPanel {
        &self.assistant
    }

    /// Sends a question through the gateway and records both sides in the chat.
    pub async fn ask(
        &mut self,
        gateway: &dyn AssistantGateway,
        text: &str,
    ) -> std::result::Result<&ChatEntry, SubmitRejected> {
        self.assistant.ask(gateway, text).await
    }
}
