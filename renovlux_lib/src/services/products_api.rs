use renovlux_api::types::{Product, ProductListPayload};
use renovlux_api::{Client, ListQuery, SearchQuery};

use super::{item_path, Page};
use crate::error::LibError;

const ENDPOINT: &str = "/products";

/// Catalog products (`/products`). Every operation propagates errors.
#[derive(Debug, Clone)]
pub struct ProductsApi {
    client: Client,
}

impl ProductsApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn list<Q: renovlux_api::Query>(&self, endpoint: &str, query: Option<&Q>) -> Result<Vec<Product>, LibError> {
        let resp = self.client.get::<Option<Vec<Product>>, Q>(endpoint, query).await?;
        Ok(resp.payload.unwrap_or_default())
    }

    /// Accepts both `{items, pagination}` and a bare array. Pagination
    /// precedence: payload, then envelope, then a local estimate.
    pub async fn get_all(&self, query: Option<&ListQuery>) -> Result<Page<Product>, LibError> {
        let resp = self
            .client
            .get::<ProductListPayload, ListQuery>(ENDPOINT, query)
            .await?;
        let (items, pagination) = match resp.payload {
            ProductListPayload::Paged { items, pagination } => (items, pagination),
            ProductListPayload::Bare(items) => (items, None),
        };
        let pagination = pagination
            .or(resp.pagination)
            .or_else(|| query.and_then(|q| q.local_page_info(items.len())));
        Ok(Page { items, pagination })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Product, LibError> {
        let endpoint = item_path(ENDPOINT, id, "Identifiant")?;
        let resp = self.client.get::<Product, ListQuery>(&endpoint, None).await?;
        Ok(resp.payload)
    }

    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, LibError> {
        let endpoint = item_path(&format!("{}/category", ENDPOINT), category, "Catégorie")?;
        self.list::<ListQuery>(&endpoint, None).await
    }

    pub async fn get_available(&self) -> Result<Vec<Product>, LibError> {
        self.list::<ListQuery>(&format!("{}/available", ENDPOINT), None)
            .await
    }

    pub async fn search(&self, q: &str) -> Result<Vec<Product>, LibError> {
        let query = SearchQuery::new(q);
        self.list(&format!("{}/search", ENDPOINT), Some(&query)).await
    }
}
