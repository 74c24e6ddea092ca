//! # Search Dispatch
//!
//! Holds the search query for the lifetime of the home screen and forwards it
//! to the results screen on submit.
//!
//! The emptiness test is a strict comparison with `""`. Whitespace-only input
//! is forwarded unchanged. This is probably not what users expect, but the
//! results screen currently relies on receiving exactly what was typed.

use std::sync::Arc;

use log::{debug, info};

use super::navigation::{NavigationIntent, Navigator, Notifier, SearchParams};

pub const EMPTY_QUERY_NOTICE: &str = "Please enter a search keyword";

/// The two observable results of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Navigated,
    NoticeShown,
}

pub struct SearchDispatcher {
    query: String,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl SearchDispatcher {
    pub fn new(navigator: Arc<dyn Navigator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            query: String::new(),
            navigator,
            notifier,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Overwrites the held query. Called on every keystroke.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Forwards the held query to the results screen, or raises the
    /// empty-query notice.
    pub fn submit_search(&self) -> SearchOutcome {
        dispatch_search(&self.query, self.navigator.as_ref(), self.notifier.as_ref())
    }
}

/// Validates `query` and emits exactly one of: a `ListRecipe` intent, or the
/// empty-query notice.
pub fn dispatch_search(
    query: &str,
    navigator: &dyn Navigator,
    notifier: &dyn Notifier,
) -> SearchOutcome {
    if !query.is_empty() {
        info!("Dispatching search for {:?}", query);
        navigator.navigate(NavigationIntent::ListRecipe(SearchParams::search(query)));
        SearchOutcome::Navigated
    } else {
        debug!("Search submitted with empty query");
        notifier.alert(EMPTY_QUERY_NOTICE);
        SearchOutcome::NoticeShown
    }
}
