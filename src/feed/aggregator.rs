use std::sync::Arc;

use log::{error, info};

use super::FeedKind;
use super::normalize::recipes_from_response;
use crate::api::{ApiError, NewestQuery, PopularQuery, Recipe, RecipeApi};
use crate::core::store::{Liveness, RecipeStore};

/// Query parameters for both feeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedConfig {
    pub popular: PopularQuery,
    pub newest: NewestQuery,
}

/// What happened to one load. Never surfaced to the renderer; callers use it
/// for logging and tests.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The store was replaced with `count` recipes.
    Published { count: usize },
    /// The request failed; the store kept its previous contents.
    Failed(ApiError),
    /// The response arrived after the screen was torn down and was dropped.
    Discarded,
}

impl LoadOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, LoadOutcome::Published { .. })
    }
}

#[derive(Debug)]
pub struct ActivationReport {
    pub popular: LoadOutcome,
    pub newest: LoadOutcome,
}

/// Populates the popular and newest stores for one screen activation.
pub struct FeedAggregator {
    api: Arc<dyn RecipeApi>,
    config: FeedConfig,
    popular: RecipeStore,
    newest: RecipeStore,
    liveness: Liveness,
}

impl FeedAggregator {
    /// `popular` is the shared store owned outside the screen; `newest` and
    /// `liveness` belong to the screen being activated.
    pub fn new(
        api: Arc<dyn RecipeApi>,
        config: FeedConfig,
        popular: RecipeStore,
        newest: RecipeStore,
        liveness: Liveness,
    ) -> Self {
        Self {
            api,
            config,
            popular,
            newest,
            liveness,
        }
    }

    /// Fetches the first popular page and replaces the shared popular list.
    pub async fn load_popular(&self) -> LoadOutcome {
        let result = self
            .api
            .fetch_popular(&self.config.popular)
            .await
            .map(recipes_from_response);
        self.commit(FeedKind::Popular, result)
    }

    /// Fetches the sorted list and replaces the screen's newest list.
    pub async fn load_newest(&self) -> LoadOutcome {
        let result = self
            .api
            .fetch_newest(&self.config.newest)
            .await
            .map(recipes_from_response);
        self.commit(FeedKind::Newest, result)
    }

    /// Runs both loads concurrently and returns once both have settled.
    /// Neither load waits on or affects the other.
    pub async fn activate(&self) -> ActivationReport {
        info!("Activating home feeds");
        let (popular, newest) = tokio::join!(self.load_popular(), self.load_newest());
        ActivationReport { popular, newest }
    }

    fn store(&self, kind: FeedKind) -> &RecipeStore {
        match kind {
            FeedKind::Popular => &self.popular,
            FeedKind::Newest => &self.newest,
        }
    }

    fn commit(&self, kind: FeedKind, result: Result<Vec<Recipe>, ApiError>) -> LoadOutcome {
        match result {
            Ok(recipes) => {
                if !self.liveness.is_active() {
                    info!(
                        "Discarding {} {} recipes: screen no longer active",
                        recipes.len(),
                        kind
                    );
                    return LoadOutcome::Discarded;
                }
                let count = recipes.len();
                self.store(kind).replace(recipes);
                info!("Published {} {} recipes", count, kind);
                LoadOutcome::Published { count }
            }
            Err(e) => {
                error!("Error loading {} recipes: {}", kind, e);
                LoadOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SortOrder;
    use crate::test_support::{Canned, CannedApi, titles};
    use serde_json::json;
    use std::sync::atomic::Ordering;
    use tokio::sync::Notify;

    fn aggregator(api: Arc<CannedApi>, popular: RecipeStore, newest: RecipeStore) -> FeedAggregator {
        FeedAggregator::new(api, FeedConfig::default(), popular, newest, Liveness::new())
    }

    fn body(items: &[&str]) -> Canned {
        let data: Vec<_> = items.iter().map(|t| json!({ "title": t })).collect();
        Canned::Body(json!({ "data": data }))
    }

    #[tokio::test]
    async fn test_activate_publishes_both_lists() {
        let api = Arc::new(CannedApi::new(
            body(&["Sentinel", "A", "B"]),
            body(&["Sentinel", "X"]),
        ));
        let (popular, newest) = (RecipeStore::new(), RecipeStore::new());
        let report = aggregator(api.clone(), popular.clone(), newest.clone())
            .activate()
            .await;

        assert!(report.popular.is_published());
        assert!(report.newest.is_published());
        assert_eq!(titles(&popular.snapshot()), vec!["A", "B"]);
        assert_eq!(titles(&newest.snapshot()), vec!["X"]);
        assert_eq!(api.popular_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.newest_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_configured_queries_are_sent() {
        let api = Arc::new(CannedApi::new(body(&[]), body(&[])));
        let config = FeedConfig {
            popular: PopularQuery { limit: 3, page: 2 },
            newest: NewestQuery {
                sort: SortOrder::Descending,
            },
        };
        let agg = FeedAggregator::new(
            api.clone(),
            config,
            RecipeStore::new(),
            RecipeStore::new(),
            Liveness::new(),
        );
        agg.activate().await;

        assert_eq!(
            *api.last_popular_query.lock().unwrap(),
            Some(PopularQuery { limit: 3, page: 2 })
        );
        assert_eq!(
            api.last_newest_query.lock().unwrap().map(|q| q.sort),
            Some(SortOrder::Descending)
        );
    }

    #[tokio::test]
    async fn test_empty_data_publishes_empty_list() {
        let api = Arc::new(CannedApi::new(body(&[]), body(&["Sentinel"])));
        let popular = RecipeStore::with_recipes(vec![Recipe::titled("Stale")]);
        let newest = RecipeStore::with_recipes(vec![Recipe::titled("Stale")]);
        let report = aggregator(api, popular.clone(), newest.clone()).activate().await;

        assert!(matches!(report.popular, LoadOutcome::Published { count: 0 }));
        assert!(matches!(report.newest, LoadOutcome::Published { count: 0 }));
        assert!(popular.is_empty());
        assert!(newest.is_empty());
    }

    #[tokio::test]
    async fn test_both_failures_leave_lists_untouched() {
        let api = Arc::new(CannedApi::new(Canned::Fail(500), Canned::Fail(502)));
        let popular = RecipeStore::with_recipes(vec![Recipe::titled("Kept")]);
        let newest = RecipeStore::new();
        let report = aggregator(api, popular.clone(), newest.clone()).activate().await;

        assert!(matches!(
            report.popular,
            LoadOutcome::Failed(ApiError::Api { status: 500, .. })
        ));
        assert!(matches!(
            report.newest,
            LoadOutcome::Failed(ApiError::Api { status: 502, .. })
        ));
        assert_eq!(titles(&popular.snapshot()), vec!["Kept"]);
        assert!(newest.is_empty());
    }

    #[tokio::test]
    async fn test_one_failure_does_not_block_the_other() {
        let api = Arc::new(CannedApi::new(Canned::Fail(500), body(&["Sentinel", "N1"])));
        let (popular, newest) = (RecipeStore::new(), RecipeStore::new());
        let report = aggregator(api, popular.clone(), newest.clone()).activate().await;

        assert!(matches!(report.popular, LoadOutcome::Failed(_)));
        assert!(popular.is_empty());
        assert_eq!(titles(&newest.snapshot()), vec!["N1"]);
    }

    #[tokio::test]
    async fn test_missing_data_field_is_a_failure() {
        let api = Arc::new(CannedApi::new(
            Canned::Body(json!({ "message": "oops" })),
            body(&[]),
        ));
        let popular = RecipeStore::with_recipes(vec![Recipe::titled("Kept")]);
        let report = aggregator(api, popular.clone(), RecipeStore::new())
            .activate()
            .await;

        assert!(matches!(report.popular, LoadOutcome::Failed(ApiError::Parse(_))));
        assert_eq!(popular.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_remainder_items_are_published() {
        let api = Arc::new(CannedApi::new(
            Canned::Body(json!({ "data": [{"title": "S"}, {"title": "A"}, {"title": 7}] })),
            Canned::Body(json!({ "data": [{"title": "S"}, null, {"title": "B"}] })),
        ));
        let (popular, newest) = (RecipeStore::new(), RecipeStore::new());
        let report = aggregator(api, popular.clone(), newest.clone()).activate().await;

        assert!(matches!(report.popular, LoadOutcome::Published { count: 2 }));
        assert!(matches!(report.newest, LoadOutcome::Published { count: 2 }));
        assert_eq!(titles(&popular.snapshot()), vec!["A", "Untitled"]);
        assert_eq!(titles(&newest.snapshot()), vec!["Untitled", "B"]);
    }

    #[tokio::test]
    async fn test_result_after_teardown_is_discarded() {
        let popular_gate = Arc::new(Notify::new());
        let newest_gate = Arc::new(Notify::new());
        let data = json!({ "data": [{"title": "Sentinel"}, {"title": "Late"}] });
        let api = Arc::new(CannedApi::new(
            Canned::Gated(popular_gate.clone(), data.clone()),
            Canned::Gated(newest_gate.clone(), data),
        ));
        let popular = RecipeStore::with_recipes(vec![Recipe::titled("Before")]);
        let newest = RecipeStore::new();
        let liveness = Liveness::new();
        let agg = FeedAggregator::new(
            api,
            FeedConfig::default(),
            popular.clone(),
            newest.clone(),
            liveness.clone(),
        );

        let handle = tokio::spawn(async move { agg.activate().await });
        liveness.deactivate();
        popular_gate.notify_one();
        newest_gate.notify_one();
        let report = handle.await.unwrap();

        assert!(matches!(report.popular, LoadOutcome::Discarded));
        assert!(matches!(report.newest, LoadOutcome::Discarded));
        assert_eq!(titles(&popular.snapshot()), vec!["Before"]);
        assert!(newest.is_empty());
    }

    #[test]
    fn test_load_popular_alone_from_sync_code() {
        let api = Arc::new(CannedApi::new(body(&["Sentinel", "A"]), body(&[])));
        let popular = RecipeStore::new();
        let agg = aggregator(api.clone(), popular.clone(), RecipeStore::new());

        let outcome = tokio_test::block_on(agg.load_popular());

        assert!(matches!(outcome, LoadOutcome::Published { count: 1 }));
        assert_eq!(titles(&popular.snapshot()), vec!["A"]);
        assert_eq!(api.newest_calls.load(Ordering::SeqCst), 0);
    }
}
