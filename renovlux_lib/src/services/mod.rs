//! One adapter per backend resource. Each owns its endpoint path, builds
//! query parameters through [`ListQuery`](renovlux_api::ListQuery) and maps
//! payloads into display shapes.

mod contact_api;
mod portfolio_api;
mod products_api;
mod services_api;

pub use self::contact_api::ContactApi;
pub use self::portfolio_api::{PortfolioApi, DEFAULT_FEATURED_LIMIT};
pub use self::products_api::ProductsApi;
pub use self::services_api::ServicesApi;

use renovlux_api::encode_segment;
use renovlux_api::types::PageInfo;
use serde::Serialize;

use crate::error::LibError;

/// A page of items with the pagination that came with it, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<PageInfo>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
        }
    }
}

/// Collapses a failed list call into an empty result. Only the services and
/// portfolio list operations go through here.
pub(crate) fn or_default<T: Default>(label: &str, result: Result<T, LibError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("{} failed, returning empty result: {}", label, e);
            T::default()
        }
    }
}

/// `{endpoint}/{segment}` with the segment percent-encoded. Blank segments
/// are rejected before anything is sent.
pub(crate) fn item_path(endpoint: &str, segment: &str, what: &str) -> Result<String, LibError> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Err(LibError::InvalidInput(format!("{} manquant.", what)));
    }
    Ok(format!("{}/{}", endpoint, encode_segment(segment)))
}
