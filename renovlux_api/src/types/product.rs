//! Catalog products (`/products`).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::id::string_id;
use super::meta::PageInfo;

/// Stock status shown on product cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Limited,
    Unavailable,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Availability::Available => "available",
            Availability::Limited => "limited",
            Availability::Unavailable => "unavailable",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A catalog product, passed through largely as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "string_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specifications: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, alias = "created_at", deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, alias = "updated_at", deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Payload of `GET /products`: either a paginated block or a bare list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProductListPayload {
    Bare(Vec<Product>),
    Paged {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<Product>,
        pagination: Option<PageInfo>,
    },
}
