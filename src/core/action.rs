//! # Actions
//!
//! Everything that can happen on the home screen becomes an `Action`.
//! User types a letter? That's `Action::QueryChanged(text)`.
//! A feed fetch settles? That's `Action::FeedsSettled { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect` the
//! shell must carry out (spawning fetches, quitting). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```

use log::{debug, info, warn};

use super::navigation::NavigationIntent;
use super::state::{App, Route};
use crate::feed::{ActivationReport, FeedKind, LoadOutcome};

#[derive(Debug)]
pub enum Action {
    QueryChanged(String),
    SubmitSearch,
    OpenRecipe { feed: FeedKind, index: usize },
    /// A navigator forwarded an intent back to the shell.
    Navigate(NavigationIntent),
    /// A notifier raised a modal alert.
    ShowNotice(String),
    DismissNotice,
    Back,
    /// Tear the home screen down and activate a fresh one.
    Reload,
    FeedsSettled {
        activation: u64,
        report: ActivationReport,
    },
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn `app.aggregator().activate()` in the background.
    ActivateFeeds,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QueryChanged(text) => {
            app.screen.search.set_query(text);
            Effect::None
        }
        Action::SubmitSearch => {
            if matches!(app.current_route(), Route::Home) && app.notice.is_none() {
                app.screen.search.submit_search();
            }
            Effect::None
        }
        Action::OpenRecipe { feed, index } => {
            if !app.screen.open_recipe(feed, index) {
                debug!("No {} recipe at index {}", feed, index);
            }
            Effect::None
        }
        Action::Navigate(intent) => {
            let route = match intent {
                NavigationIntent::ListRecipe(params) => {
                    app.status_message = format!("Results for \"{}\"", params.search_keyword);
                    Route::Results(params)
                }
                NavigationIntent::Detail { recipe } => {
                    app.status_message = recipe.display_title().to_string();
                    Route::Detail(recipe)
                }
            };
            app.routes.push(route);
            Effect::None
        }
        Action::ShowNotice(message) => {
            app.notice = Some(message);
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Back => {
            if app.notice.take().is_none() && app.routes.len() > 1 {
                app.routes.pop();
                app.status_message.clear();
            }
            Effect::None
        }
        Action::Reload => {
            app.rebuild_screen();
            Effect::ActivateFeeds
        }
        Action::FeedsSettled { activation, report } => {
            if activation != app.activation {
                debug!("Ignoring settle from stale activation {}", activation);
                return Effect::None;
            }
            log_outcome(FeedKind::Popular, &report.popular);
            log_outcome(FeedKind::Newest, &report.newest);
            app.feeds_loading = false;
            app.status_message.clear();
            Effect::None
        }
        Action::Quit => {
            app.screen.teardown();
            Effect::Quit
        }
    }
}

fn log_outcome(kind: FeedKind, outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Published { count } => info!("{} feed settled with {} recipes", kind, count),
        LoadOutcome::Failed(e) => warn!("{} feed unavailable: {}", kind, e),
        LoadOutcome::Discarded => debug!("{} feed result discarded", kind),
    }
}
