use serde::{Deserialize, Deserializer, Serialize};

/// Identifier as the backend sends it: numeric primary keys on older
/// endpoints, strings (uuids, slugs) on newer ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Int(id) => write!(f, "{}", id),
            RawId::Str(id) => f.write_str(id),
        }
    }
}

/// Deserializes a number-or-string id into its string form.
pub fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(|id| id.to_string())
        .unwrap_or_default())
}
