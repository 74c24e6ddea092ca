//! # Application State
//!
//! Core state for the recipe feed. Domain logic only, no terminal types.
//!
//! ```text
//! App
//! ├── api: Arc<dyn RecipeApi>        // recipe service client
//! ├── feed_config: FeedConfig        // query parameters for both feeds
//! ├── popular: RecipeStore           // shared, outlives every screen
//! ├── screen: HomeScreen             // current activation
//! │   ├── search: SearchDispatcher   // query + navigator + notifier
//! │   ├── popular: RecipeStore       // same handle as App.popular
//! │   ├── newest: RecipeStore        // local to this activation
//! │   └── liveness: Liveness         // cleared on teardown
//! ├── routes: Vec<Route>             // navigation stack, Home at the bottom
//! ├── notice: Option<String>         // modal alert text
//! ├── activation: u64                // bumps on every HomeScreen rebuild
//! ├── feeds_loading: bool            // current activation not yet settled
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use log::{debug, info};

use super::navigation::{NavigationIntent, Navigator, Notifier, SearchParams};
use super::search::SearchDispatcher;
use super::store::{Liveness, RecipeStore};
use crate::api::{Recipe, RecipeApi};
use crate::feed::{FeedAggregator, FeedConfig, FeedKind};

/// One activation of the home screen.
///
/// Dropping the screen clears its liveness flag, so fetches still in flight
/// commit nothing.
pub struct HomeScreen {
    pub search: SearchDispatcher,
    popular: RecipeStore,
    newest: RecipeStore,
    liveness: Liveness,
    navigator: Arc<dyn Navigator>,
}

impl HomeScreen {
    /// `popular` is the externally owned shared list; it is not cleared here.
    pub fn new(
        popular: RecipeStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            search: SearchDispatcher::new(navigator.clone(), notifier),
            popular,
            newest: RecipeStore::new(),
            liveness: Liveness::new(),
            navigator,
        }
    }

    pub fn popular(&self) -> &RecipeStore {
        &self.popular
    }

    pub fn newest(&self) -> &RecipeStore {
        &self.newest
    }

    pub fn feed(&self, kind: FeedKind) -> &RecipeStore {
        match kind {
            FeedKind::Popular => &self.popular,
            FeedKind::Newest => &self.newest,
        }
    }

    pub fn is_active(&self) -> bool {
        self.liveness.is_active()
    }

    /// Builds the aggregator that fills this screen's stores.
    pub fn aggregator(&self, api: Arc<dyn RecipeApi>, config: FeedConfig) -> FeedAggregator {
        FeedAggregator::new(
            api,
            config,
            self.popular.clone(),
            self.newest.clone(),
            self.liveness.clone(),
        )
    }

    /// Emits a `Detail` intent for the selected card. Returns false when the
    /// index is out of range.
    pub fn open_recipe(&self, kind: FeedKind, index: usize) -> bool {
        match self.feed(kind).get(index) {
            Some(recipe) => {
                debug!("Opening {} recipe #{}: {}", kind, index, recipe.display_title());
                self.navigator.navigate(NavigationIntent::Detail { recipe });
                true
            }
            None => false,
        }
    }

    /// Marks the screen as torn down.
    pub fn teardown(&self) {
        self.liveness.deactivate();
    }
}

impl Drop for HomeScreen {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// A screen on the navigation stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Results(SearchParams),
    Detail(Recipe),
}

pub struct App {
    pub api: Arc<dyn RecipeApi>,
    pub feed_config: FeedConfig,
    pub popular: RecipeStore,
    pub screen: HomeScreen,
    pub routes: Vec<Route>,
    pub notice: Option<String>,
    pub activation: u64,
    pub feeds_loading: bool,
    pub status_message: String,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl App {
    pub fn new(
        api: Arc<dyn RecipeApi>,
        feed_config: FeedConfig,
        popular: RecipeStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let screen = HomeScreen::new(popular.clone(), navigator.clone(), notifier.clone());
        Self {
            api,
            feed_config,
            popular,
            screen,
            routes: vec![Route::Home],
            notice: None,
            activation: 0,
            feeds_loading: true,
            status_message: String::from("Loading recipes..."),
            navigator,
            notifier,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.routes.last().unwrap_or(&Route::Home)
    }

    pub fn aggregator(&self) -> FeedAggregator {
        self.screen.aggregator(self.api.clone(), self.feed_config)
    }

    /// Tears the current home screen down and replaces it with a fresh one.
    /// The shared popular list carries over; newest and the query do not.
    pub fn rebuild_screen(&mut self) {
        self.screen.teardown();
        self.screen = HomeScreen::new(
            self.popular.clone(),
            self.navigator.clone(),
            self.notifier.clone(),
        );
        self.activation += 1;
        self.feeds_loading = true;
        self.routes.truncate(1);
        self.notice = None;
        self.status_message = String::from("Loading recipes...");
        info!("Home screen rebuilt (activation {})", self.activation);
    }
}
