//! Portfolio projects (`/projects`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::RawId;

/// Project category. Current backends nest `{id, name}`; older ones sent
/// the category name as a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCategory {
    Name(String),
    Nested {
        id: Option<RawId>,
        name: Option<String>,
    },
}

/// Project row as the `/projects` endpoints return it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProject {
    pub id: Option<RawId>,
    pub uuid: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// A JSON array of paths, a string holding one, or null.
    #[serde(alias = "secondaryImages")]
    pub secondary_images: Option<Value>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(alias = "updatedAt")]
    pub updated_at: Option<String>,
    pub category: Option<RawCategory>,
}

/// Display shape of a portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub uuid: Option<String>,
    pub title: String,
    /// Lowercased title with whitespace runs replaced by `-`.
    pub slug: String,
    pub description: String,
    pub image: String,
    /// Category name.
    pub category: String,
    /// Only known when the backend nests the category object.
    pub category_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub secondary_images: Vec<String>,
}
