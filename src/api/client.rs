use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;

use super::types::{NewestQuery, PopularQuery, RecipeListResponse};

/// Errors that can occur while talking to the recipe service.
#[derive(Debug)]
pub enum ApiError {
    /// Client misconfigured (bad base URL, TLS backend unavailable).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the expected `{ "data": [...] }` envelope.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Read-only access to the recipe list endpoints.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `GET /recipe?limit=..&page=..`
    async fn fetch_popular(&self, query: &PopularQuery) -> Result<RecipeListResponse, ApiError>;

    /// `GET /recipe?sort=..`
    async fn fetch_newest(&self, query: &NewestQuery) -> Result<RecipeListResponse, ApiError>;
}

/// Recipe API over HTTP.
pub struct HttpRecipeApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRecipeApi {
    /// Builds a client for `base_url`. No request timeout is applied unless
    /// one is given.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_list<Q: Serialize + fmt::Debug + Sync>(
        &self,
        query: &Q,
    ) -> Result<RecipeListResponse, ApiError> {
        let url = format!("{}/recipe", self.base_url);
        info!("Recipe API request: GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Recipe API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Recipe API error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("Recipe API body: {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn fetch_popular(&self, query: &PopularQuery) -> Result<RecipeListResponse, ApiError> {
        self.get_list(query).await
    }

    async fn fetch_newest(&self, query: &NewestQuery) -> Result<RecipeListResponse, ApiError> {
        self.get_list(query).await
    }
}
