//! Renovation services offered by the company.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::RawId;

/// Service row as the `/services` endpoints return it (snake_case columns).
///
/// Every field is optional: the mapping layer supplies display defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawService {
    pub id: Option<RawId>,
    pub name: Option<String>,
    /// Some deployments already send the display name as `title`.
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// A JSON array, a string holding a JSON array, or a comma-separated list.
    pub features: Option<Value>,
    /// `true`/`false`, `0`/`1`, or their string forms.
    #[serde(alias = "isActive")]
    pub is_active: Option<Value>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(alias = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Display shape of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}
