//! The recipe API prepends a placeholder record to every list response. It is
//! dropped unconditionally before anything reaches a store.
//!
//! Whether that first record is always a placeholder is unverified; the rule
//! may also be hiding a real recipe. It is kept as-is until the API contract
//! says otherwise.

use crate::api::{Recipe, RecipeListResponse};

/// Removes the first element, preserving the order of the rest. Empty input
/// yields an empty list.
pub fn drop_sentinel<T>(items: Vec<T>) -> Vec<T> {
    items.into_iter().skip(1).collect()
}

/// Drops the sentinel, then converts the remaining items to recipes.
///
/// Conversion is lenient: an item with missing or wrong-typed fields is still
/// published, so a response of N items always yields N - 1 recipes.
pub fn recipes_from_response(response: RecipeListResponse) -> Vec<Recipe> {
    drop_sentinel(response.data)
        .into_iter()
        .map(Recipe::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> RecipeListResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_drop_sentinel_removes_only_first() {
        assert_eq!(drop_sentinel(vec![1, 2, 3, 4]), vec![2, 3, 4]);
    }

    #[test]
    fn test_drop_sentinel_single_item() {
        assert!(drop_sentinel(vec!["only"]).is_empty());
    }

    #[test]
    fn test_drop_sentinel_empty_is_safe() {
        assert!(drop_sentinel(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_sentinel_example() {
        let recipes = recipes_from_response(response(json!({
            "data": [{"title": "Sentinel"}, {"title": "A"}, {"title": "B"}]
        })));
        assert_eq!(recipes, vec![Recipe::titled("A"), Recipe::titled("B")]);
    }

    #[test]
    fn test_non_object_sentinel_is_dropped() {
        let recipes = recipes_from_response(response(json!({
            "data": [null, {"title": "A"}]
        })));
        assert_eq!(recipes, vec![Recipe::titled("A")]);
    }

    #[test]
    fn test_malformed_items_after_sentinel_are_still_published() {
        let recipes = recipes_from_response(response(json!({
            "data": [{"title": "Sentinel"}, {"title": "A"}, {"title": 7}, null, "loose"]
        })));
        assert_eq!(recipes.len(), 4);
        assert_eq!(recipes[0], Recipe::titled("A"));
        assert_eq!(recipes[1].display_title(), "Untitled");
        assert_eq!(recipes[1].extra["title"], 7);
        assert_eq!(recipes[2].extra["value"], serde_json::Value::Null);
        assert_eq!(recipes[3].extra["value"], "loose");
    }
}
