use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recipe summary as returned by the list endpoints.
///
/// Only `title` and `recipe_picture` are read by the home screen. Both may be
/// missing; the renderer falls back to placeholders. Any other fields are kept
/// in `extra` so a detail screen receives the whole record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_picture: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    pub fn picture_uri(&self) -> &str {
        self.recipe_picture.as_deref().unwrap_or("")
    }
}

/// Lenient conversion used for list items. Never fails: a `title` or
/// `recipe_picture` that is not a string stays in `extra` under its own key,
/// and a non-object item is kept whole under `extra["value"]`.
impl From<Value> for Recipe {
    fn from(value: Value) -> Self {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                let mut extra = Map::new();
                extra.insert("value".to_string(), other);
                return Self {
                    extra,
                    ..Default::default()
                };
            }
        };

        let id = fields.remove("id").filter(|v| !v.is_null());
        let title = take_string(&mut fields, "title");
        let recipe_picture = take_string(&mut fields, "recipe_picture");
        Self {
            id,
            title,
            recipe_picture,
            extra: fields,
        }
    }
}

/// Removes `key` if it holds a string. Any other value is left in place.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(_)) => match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        Some(Value::Null) => {
            fields.remove(key);
            None
        }
        _ => None,
    }
}

/// Envelope shared by every list endpoint: `{ "data": [...] }`.
///
/// Items stay as raw JSON until the sentinel is dropped, so a placeholder
/// record that does not look like a recipe cannot fail the whole response.
#[derive(Deserialize, Debug)]
pub struct RecipeListResponse {
    pub data: Vec<Value>,
}

/// Sort direction accepted by `GET /recipe?sort=`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

pub const DEFAULT_POPULAR_LIMIT: u32 = 9;
pub const DEFAULT_POPULAR_PAGE: u32 = 1;

/// Query string for the "popular" slice: a fixed-size first page.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularQuery {
    pub limit: u32,
    pub page: u32,
}

impl Default for PopularQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_POPULAR_LIMIT,
            page: DEFAULT_POPULAR_PAGE,
        }
    }
}

/// Query string for the "newest" slice.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewestQuery {
    pub sort: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_missing_fields_are_tolerated() {
        let recipe: Recipe = serde_json::from_str("{}").unwrap();
        assert_eq!(recipe.title, None);
        assert_eq!(recipe.display_title(), "Untitled");
        assert_eq!(recipe.picture_uri(), "");
    }

    #[test]
    fn test_recipe_keeps_unknown_fields() {
        let json = r#"{
            "id": 42,
            "title": "Nasi Goreng",
            "recipe_picture": "https://img.example/nasi.jpg",
            "ingredients": "rice, egg",
            "category": "rice"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, Some(Value::from(42)));
        assert_eq!(recipe.display_title(), "Nasi Goreng");
        assert_eq!(recipe.picture_uri(), "https://img.example/nasi.jpg");
        assert_eq!(recipe.extra.len(), 2);
        assert_eq!(recipe.extra["ingredients"], "rice, egg");
    }

    #[test]
    fn test_recipe_string_id() {
        let recipe: Recipe = serde_json::from_str(r#"{"id":"abc-1","title":"Soup"}"#).unwrap();
        assert_eq!(recipe.id, Some(Value::from("abc-1")));
    }

    #[test]
    fn test_list_response_requires_data() {
        let result = serde_json::from_str::<RecipeListResponse>(r#"{"message":"ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_response_accepts_non_object_items() {
        let response: RecipeListResponse =
            serde_json::from_str(r#"{"data":[null,{"title":"A"}]}"#).unwrap();
        assert_eq!(response.data.len(), 2);
        assert!(response.data[0].is_null());
    }

    #[test]
    fn test_from_value_keeps_wrong_typed_title_in_extra() {
        let recipe = Recipe::from(serde_json::json!({ "title": 7, "recipe_picture": "p.jpg" }));
        assert_eq!(recipe.title, None);
        assert_eq!(recipe.display_title(), "Untitled");
        assert_eq!(recipe.picture_uri(), "p.jpg");
        assert_eq!(recipe.extra["title"], 7);
    }

    #[test]
    fn test_from_value_non_object_item() {
        let recipe = Recipe::from(Value::Null);
        assert_eq!(recipe.title, None);
        assert_eq!(recipe.extra["value"], Value::Null);

        let recipe = Recipe::from(Value::from("loose string"));
        assert_eq!(recipe.extra["value"], "loose string");
    }

    #[test]
    fn test_from_value_matches_serde_for_well_formed_items() {
        let json = serde_json::json!({
            "id": 3,
            "title": "Soto",
            "recipe_picture": "soto.jpg",
            "category": "soup"
        });
        let strict: Recipe = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(Recipe::from(json), strict);
    }

    #[test]
    fn test_sort_order_serde_names() {
        assert_eq!(serde_json::to_string(&SortOrder::Ascending).unwrap(), "\"asc\"");
        let parsed: SortOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(parsed, SortOrder::Descending);
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn test_default_queries() {
        assert_eq!(PopularQuery::default(), PopularQuery { limit: 9, page: 1 });
        assert_eq!(NewestQuery::default().sort, SortOrder::Ascending);
    }
}
