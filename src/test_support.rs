//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use crate::api::{ApiError, NewestQuery, PopularQuery, RecipeApi, RecipeListResponse};
use crate::core::navigation::{NavigationIntent, Navigator, Notifier};

/// Canned answer for one endpoint.
#[derive(Clone)]
pub enum Canned {
    /// Respond with this JSON body.
    Body(Value),
    /// Respond with an HTTP error status.
    Fail(u16),
    /// Wait for the notify, then respond with this body.
    Gated(Arc<Notify>, Value),
}

impl Canned {
    async fn resolve(&self) -> Result<RecipeListResponse, ApiError> {
        match self {
            Canned::Body(value) => {
                serde_json::from_value(value.clone()).map_err(|e| ApiError::Parse(e.to_string()))
            }
            Canned::Fail(status) => Err(ApiError::Api {
                status: *status,
                message: "canned failure".to_string(),
            }),
            Canned::Gated(gate, value) => {
                gate.notified().await;
                serde_json::from_value(value.clone()).map_err(|e| ApiError::Parse(e.to_string()))
            }
        }
    }
}

/// A recipe API that answers from memory and counts calls.
pub struct CannedApi {
    pub popular: Canned,
    pub newest: Canned,
    pub popular_calls: AtomicUsize,
    pub newest_calls: AtomicUsize,
    pub last_popular_query: Mutex<Option<PopularQuery>>,
    pub last_newest_query: Mutex<Option<NewestQuery>>,
}

impl CannedApi {
    pub fn new(popular: Canned, newest: Canned) -> Self {
        Self {
            popular,
            newest,
            popular_calls: AtomicUsize::new(0),
            newest_calls: AtomicUsize::new(0),
            last_popular_query: Mutex::new(None),
            last_newest_query: Mutex::new(None),
        }
    }
}

#[async_trait]
impl RecipeApi for CannedApi {
    async fn fetch_popular(&self, query: &PopularQuery) -> Result<RecipeListResponse, ApiError> {
        self.popular_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_popular_query.lock().unwrap() = Some(*query);
        self.popular.resolve().await
    }

    async fn fetch_newest(&self, query: &NewestQuery) -> Result<RecipeListResponse, ApiError> {
        self.newest_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_newest_query.lock().unwrap() = Some(*query);
        self.newest.resolve().await
    }
}

/// Records every navigation intent it receives.
#[derive(Default)]
pub struct RecordingNavigator {
    pub intents: Mutex<Vec<NavigationIntent>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        self.intents.lock().unwrap().push(intent);
    }
}

/// Records every notice it is asked to show.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

/// Titles of a recipe list, for compact assertions.
pub fn titles(recipes: &[crate::api::Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.display_title().to_string()).collect()
}
