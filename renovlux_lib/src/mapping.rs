//! Pure mapping from backend rows to display shapes.
//!
//! Every function here is total: missing or malformed fields get a display
//! default instead of an error.

use renovlux_api::types::{PortfolioItem, RawCategory, RawProject, RawService, Service};
use serde_json::Value;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
pub const UNTITLED_SERVICE: &str = "Service sans titre";
pub const UNTITLED_PROJECT: &str = "Projet sans titre";
pub const DEFAULT_CATEGORY: &str = "Autre";

/// Lowercases and joins whitespace-separated words with `-`.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts a JSON array, a string holding a JSON array, or a comma-separated
/// string. Blank entries are dropped.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.starts_with('[') {
                if let Ok(parsed @ Value::Array(_)) = serde_json::from_str::<Value>(trimmed) {
                    return string_list(Some(&parsed));
                }
            }
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Reads `true`/`false`, `0`/`1` and their string forms; anything else
/// yields `default`.
pub fn truthy(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(default),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => true,
            "0" | "false" => false,
            _ => default,
        },
        _ => default,
    }
}

pub fn map_service(raw: RawService) -> Service {
    let title = non_empty(raw.name)
        .or_else(|| non_empty(raw.title))
        .unwrap_or_else(|| UNTITLED_SERVICE.to_string());
    let slug = non_empty(raw.slug).unwrap_or_else(|| slugify(&title));
    Service {
        id: raw.id.map(|id| id.to_string()).unwrap_or_default(),
        features: string_list(raw.features.as_ref()),
        is_active: truthy(raw.is_active.as_ref(), true),
        image: non_empty(raw.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        description: raw.description.unwrap_or_default(),
        created_at: raw.created_at.unwrap_or_default(),
        updated_at: raw.updated_at.unwrap_or_default(),
        title,
        slug,
    }
}

pub fn map_project(raw: RawProject) -> PortfolioItem {
    let title = non_empty(raw.title).unwrap_or_else(|| UNTITLED_PROJECT.to_string());
    let (category, category_id) = match raw.category {
        Some(RawCategory::Name(name)) => (non_empty(Some(name)), None),
        Some(RawCategory::Nested { id, name }) => (non_empty(name), id.map(|id| id.to_string())),
        None => (None, None),
    };
    let created_at = raw.created_at.unwrap_or_default();
    let updated_at = non_empty(raw.updated_at).unwrap_or_else(|| created_at.clone());
    PortfolioItem {
        id: raw.id.map(|id| id.to_string()).unwrap_or_default(),
        uuid: non_empty(raw.uuid),
        slug: slugify(&title),
        title,
        description: raw.description.unwrap_or_default(),
        image: non_empty(raw.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        category_id,
        secondary_images: string_list(raw.secondary_images.as_ref()),
        created_at,
        updated_at,
    }
}

/// Decodes a list payload row by row. Rows that do not fit the raw shape are
/// skipped with a warning rather than failing the whole page; a payload that
/// is not an array at all maps to an empty list.
pub fn decode_rows<R, T>(payload: Value, map: impl Fn(R) -> T) -> Vec<T>
where
    R: serde::de::DeserializeOwned,
{
    match payload {
        Value::Array(rows) => rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<R>(row) {
                Ok(raw) => Some(map(raw)),
                Err(e) => {
                    tracing::warn!("Skipping malformed row: {}", e);
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!("Expected a list payload, got {}", value_kind(&other));
            Vec::new()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use renovlux_api::types::RawId;
    use serde_json::json;

    use super::*;

    #[test]
    fn slugify_collapses_whitespace() {
        assert_eq!(slugify("Villa  Les Almadies"), "villa-les-almadies");
        assert_eq!(slugify("  Salle de Bain "), "salle-de-bain");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn string_list_shapes() {
        assert_eq!(string_list(Some(&json!(["a", " b ", ""]))), vec!["a", "b"]);
        assert_eq!(string_list(Some(&json!("[\"x\",\"y\"]"))), vec!["x", "y"]);
        assert_eq!(string_list(Some(&json!("Plans 3D, Pose ,"))), vec!["Plans 3D", "Pose"]);
        assert!(string_list(Some(&json!(null))).is_empty());
        assert!(string_list(Some(&json!({"a": 1}))).is_empty());
        assert!(string_list(None).is_empty());
    }

    #[test]
    fn truthy_values() {
        assert!(truthy(Some(&json!(1)), false));
        assert!(!truthy(Some(&json!(0)), true));
        assert!(!truthy(Some(&json!("false")), true));
        assert!(truthy(Some(&json!("1")), false));
        assert!(truthy(Some(&json!("peut-être")), true));
        assert!(truthy(None, true));
    }

    #[test]
    fn empty_service_gets_defaults() {
        let service = map_service(RawService::default());
        assert_eq!(service.id, "");
        assert_eq!(service.title, UNTITLED_SERVICE);
        assert_eq!(service.slug, "service-sans-titre");
        assert_eq!(service.image, PLACEHOLDER_IMAGE);
        assert!(service.features.is_empty());
        assert!(service.is_active);
    }

    #[test]
    fn service_fields_are_mapped() {
        let service = map_service(RawService {
            id: Some(RawId::Int(7)),
            name: Some("Peinture".to_string()),
            features: Some(json!("Intérieur,Extérieur")),
            is_active: Some(json!(0)),
            ..Default::default()
        });
        assert_eq!(service.id, "7");
        assert_eq!(service.title, "Peinture");
        assert_eq!(service.slug, "peinture");
        assert_eq!(service.features, vec!["Intérieur", "Extérieur"]);
        assert!(!service.is_active);
    }

    #[test]
    fn nested_category_keeps_id() {
        let item = map_project(RawProject {
            id: Some(RawId::Str("p-1".to_string())),
            title: Some("Villa  Les Almadies".to_string()),
            category: Some(RawCategory::Nested {
                id: Some(RawId::Int(3)),
                name: Some("Résidentiel".to_string()),
            }),
            created_at: Some("2023-11-20".to_string()),
            ..Default::default()
        });
        assert_eq!(item.slug, "villa-les-almadies");
        assert_eq!(item.category, "Résidentiel");
        assert_eq!(item.category_id.as_deref(), Some("3"));
        assert_eq!(item.updated_at, "2023-11-20");
    }

    #[test]
    fn flat_or_missing_category() {
        let flat = map_project(RawProject {
            category: Some(RawCategory::Name("Commercial".to_string())),
            ..Default::default()
        });
        assert_eq!(flat.category, "Commercial");
        assert!(flat.category_id.is_none());

        let missing = map_project(RawProject::default());
        assert_eq!(missing.title, UNTITLED_PROJECT);
        assert_eq!(missing.category, DEFAULT_CATEGORY);
        assert_eq!(missing.image, PLACEHOLDER_IMAGE);
        assert!(missing.secondary_images.is_empty());
    }

    #[test]
    fn decode_rows_skips_bad_rows() {
        let rows = decode_rows(json!([{"id": 1, "name": "A"}, 42, {"id": "2"}]), map_service);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, "2");
        assert!(decode_rows(json!({"oops": true}), map_service).is_empty());
        assert!(decode_rows(Value::Null, map_service).is_empty());
    }
}
