//! # Recipe API
//!
//! HTTP access to the remote recipe service. The service itself is external;
//! this module only knows the two list queries the home screen issues and the
//! `{ "data": [...] }` envelope they answer with.

pub mod client;
pub mod types;

pub use client::{ApiError, HttpRecipeApi, RecipeApi};
pub use types::{NewestQuery, PopularQuery, Recipe, RecipeListResponse, SortOrder};
