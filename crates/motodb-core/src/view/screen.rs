use serde::{Deserialize, Serialize};

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Filterable product list (initial screen).
    List,
    /// One product's full sheet.
    Detail,
    /// Side-by-side comparison.
    Compare,
    /// Chat with the product advisor.
    Assistant,
    /// Informational deployment guide.
    Guide,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::List => "Models",
            Screen::Detail => "Model details",
            Screen::Compare => "Compare",
            Screen::Assistant => "Advisor",
            Screen::Guide => "Deployment guide",
        }
    }

    /// Tab highlighted in the bottom navigation while this screen is shown.
    ///
    /// Detail and guide have no tab of their own and highlight the list.
    pub fn nav_tab(self) -> Destination {
        match self {
            Screen::List | Screen::Detail | Screen::Guide => Destination::List,
            Screen::Compare => Destination::Compare,
            Screen::Assistant => Destination::Assistant,
        }
    }
}

/// Screens reachable by direct navigation.
///
/// `Detail` is absent: it is only entered by opening a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    List,
    Compare,
    Assistant,
    Guide,
}

impl Destination {
    /// Tabs of the bottom navigation bar, in order.
    pub const TABS: [Destination; 3] = [
        Destination::List,
        Destination::Compare,
        Destination::Assistant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Destination::List => "Browse",
            Destination::Compare => "Compare",
            Destination::Assistant => "Advisor",
            Destination::Guide => "Guide",
        }
    }
}

impl From<Destination> for Screen {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::List => Screen::List,
            Destination::Compare => Screen::Compare,
            Destination::Assistant => Screen::Assistant,
            Destination::Guide => Screen::Guide,
        }
    }
}
