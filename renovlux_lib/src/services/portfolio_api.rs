use renovlux_api::types::{PortfolioItem, RawProject};
use renovlux_api::{Client, ListQuery};
use serde_json::Value;

use super::{item_path, or_default, Page};
use crate::error::LibError;
use crate::mapping::{decode_rows, map_project};

const ENDPOINT: &str = "/projects";

pub const DEFAULT_FEATURED_LIMIT: u32 = 6;

/// Portfolio projects (`/projects`).
///
/// Like [`ServicesApi`](super::ServicesApi), list operations swallow errors
/// and the `try_*` variants propagate them.
#[derive(Debug, Clone)]
pub struct PortfolioApi {
    client: Client,
}

impl PortfolioApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn list(&self, endpoint: &str, query: Option<&ListQuery>) -> Result<Page<PortfolioItem>, LibError> {
        let resp = self.client.get::<Value, ListQuery>(endpoint, query).await?;
        let items = decode_rows(resp.payload, map_project);
        let pagination = resp
            .pagination
            .or_else(|| query.and_then(|q| q.local_page_info(items.len())));
        Ok(Page { items, pagination })
    }

    /// Pagination comes from the envelope when the backend sends it,
    /// otherwise it is estimated from the page returned when both `page`
    /// and `limit` were requested.
    pub async fn try_get_all(&self, query: Option<&ListQuery>) -> Result<Page<PortfolioItem>, LibError> {
        self.list(ENDPOINT, query).await
    }

    pub async fn get_all(&self, query: Option<&ListQuery>) -> Page<PortfolioItem> {
        or_default("GET /projects", self.try_get_all(query).await)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<PortfolioItem, LibError> {
        let endpoint = item_path(ENDPOINT, id, "Identifiant")?;
        let resp = self.client.get::<RawProject, ListQuery>(&endpoint, None).await?;
        Ok(map_project(resp.payload))
    }

    pub async fn try_get_by_category(&self, category: &str) -> Result<Vec<PortfolioItem>, LibError> {
        let endpoint = item_path(&format!("{}/category", ENDPOINT), category, "Catégorie")?;
        Ok(self.list(&endpoint, None).await?.items)
    }

    pub async fn get_by_category(&self, category: &str) -> Vec<PortfolioItem> {
        or_default("GET /projects/category", self.try_get_by_category(category).await)
    }

    /// The first `limit` projects, in backend order.
    pub async fn try_get_featured(&self, limit: u32) -> Result<Vec<PortfolioItem>, LibError> {
        let query = ListQuery::default().with_limit(limit);
        Ok(self.list(ENDPOINT, Some(&query)).await?.items)
    }

    pub async fn get_featured(&self, limit: u32) -> Vec<PortfolioItem> {
        or_default("GET /projects (featured)", self.try_get_featured(limit).await)
    }
}
