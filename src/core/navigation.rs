//! # Navigation & Notices
//!
//! The home screen never renders other screens itself. It hands a
//! `NavigationIntent` to a `Navigator` and a message to a `Notifier`; whatever
//! shell hosts the screen decides what those mean.

use serde::Serialize;

use crate::api::Recipe;

/// How the results screen should interpret its parameters.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    #[serde(rename = "search")]
    Search,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Search => "search",
        }
    }
}

/// Parameters handed to the results screen.
///
/// Serializes as `{ "searchKeyword": "...", "searchMode": "search" }`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search_keyword: String,
    pub search_mode: SearchMode,
}

impl SearchParams {
    pub fn search(keyword: impl Into<String>) -> Self {
        Self {
            search_keyword: keyword.into(),
            search_mode: SearchMode::Search,
        }
    }
}

/// A request to move to another screen.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationIntent {
    /// The recipe results list.
    ListRecipe(SearchParams),
    /// A single recipe, carried whole.
    Detail { recipe: Recipe },
}

/// Receives navigation intents. Fire-and-forget: implementations must not
/// block the caller on the destination screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}

/// The modal alert primitive.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
