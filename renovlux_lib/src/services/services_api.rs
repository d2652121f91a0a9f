use renovlux_api::types::{RawService, Service};
use renovlux_api::{Client, ListQuery};
use serde_json::Value;

use super::{item_path, or_default};
use crate::error::LibError;
use crate::mapping::{decode_rows, map_service};

const ENDPOINT: &str = "/services";

/// Renovation services (`/services`).
///
/// The list operations never fail: on any error they log and return an
/// empty list. Use the `try_*` variants to see the error.
#[derive(Debug, Clone)]
pub struct ServicesApi {
    client: Client,
}

impl ServicesApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn list(&self, endpoint: &str) -> Result<Vec<Service>, LibError> {
        let resp = self.client.get::<Value, ListQuery>(endpoint, None).await?;
        Ok(decode_rows(resp.payload, map_service))
    }

    async fn item(&self, endpoint: &str) -> Result<Service, LibError> {
        let resp = self.client.get::<RawService, ListQuery>(endpoint, None).await?;
        Ok(map_service(resp.payload))
    }

    pub async fn try_get_all(&self) -> Result<Vec<Service>, LibError> {
        self.list(ENDPOINT).await
    }

    pub async fn get_all(&self) -> Vec<Service> {
        or_default("GET /services", self.try_get_all().await)
    }

    pub async fn try_get_active(&self) -> Result<Vec<Service>, LibError> {
        self.list(&format!("{}/active", ENDPOINT)).await
    }

    pub async fn get_active(&self) -> Vec<Service> {
        or_default("GET /services/active", self.try_get_active().await)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Service, LibError> {
        self.item(&item_path(ENDPOINT, id, "Identifiant")?).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Service, LibError> {
        let endpoint = item_path(&format!("{}/slug", ENDPOINT), slug, "Slug")?;
        self.item(&endpoint).await
    }
}
