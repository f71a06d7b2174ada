use thiserror::Error;

use super::screen::{Destination, Screen};
use crate::catalog::CatalogStore;

/// A user action that changes the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Open a product's detail screen from the list.
    OpenProduct(String),
    /// Jump to a navigation destination.
    Navigate(Destination),
    /// Return to the list.
    Back,
}

/// Rejected navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown product '{0}'")]
    UnknownProduct(String),

    #[error("Products can only be opened from the list (current screen: {0:?})")]
    NotFromList(Screen),
}

/// Current screen plus the state that only exists on that screen.
///
/// The selected product lives inside `Detail`, so leaving the detail screen
/// drops it and the detail screen can never exist without one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail {
        product_id: String,
    },
    Compare,
    Assistant,
    Guide,
}

impl View {
    pub fn screen(&self) -> Screen {
        match self {
            View::List => Screen::List,
            View::Detail { .. } => Screen::Detail,
            View::Compare => Screen::Compare,
            View::Assistant => Screen::Assistant,
            View::Guide => Screen::Guide,
        }
    }

    pub fn selected_product(&self) -> Option<&str> {
        match self {
            View::Detail { product_id } => Some(product_id.as_str()),
            _ => None,
        }
    }
}

impl From<Destination> for View {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::List => View::List,
            Destination::Compare => View::Compare,
            Destination::Assistant => View::Assistant,
            Destination::Guide => View::Guide,
        }
    }
}

/// Owns the current [`View`] and applies [`ViewAction`]s to it.
///
/// Transitions only happen through [`ViewController::dispatch`]; there are no
/// timed transitions and no terminal state.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    view: View,
}

impl ViewController {
    /// Starts on the list screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn selected_product(&self) -> Option<&str> {
        self.view.selected_product()
    }

    /// Jumps to a navigation destination. Always accepted.
    pub fn navigate(&mut self, destination: Destination) -> Screen {
        let next = View::from(destination);
        tracing::debug!("[View] {:?} -> {:?}", self.screen(), next);
        self.view = next;
        self.screen()
    }

    /// Applies an action and returns the resulting screen.
    ///
    /// A rejected action leaves the view unchanged.
    pub fn dispatch(
        &mut self,
        catalog: &CatalogStore,
        action: ViewAction,
    ) -> Result<Screen, NavigationError> {
        let from = self.screen();
        let next = match action {
            ViewAction::OpenProduct(product_id) => {
                if from != Screen::List {
                    return Err(NavigationError::NotFromList(from));
                }
                if !catalog.contains(&product_id) {
                    return Err(NavigationError::UnknownProduct(product_id));
                }
                View::Detail { product_id }
            }
            ViewAction::Navigate(destination) => return Ok(self.navigate(destination)),
            ViewAction::Back => View::List,
        };

        tracing::debug!("[View] {:?} -> {:?}", from, next);
        self.view = next;
        Ok(self.screen())
    }
}
