//! Response envelope and pagination metadata.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination block, as reported by the backend or computed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(alias = "current_page")]
    pub page: u32,
    #[serde(alias = "per_page", alias = "pageSize")]
    pub limit: u32,
    #[serde(alias = "total_items", alias = "totalItems")]
    pub total: u64,
    #[serde(alias = "total_pages", alias = "last_page")]
    pub total_pages: u64,
}

impl PageInfo {
    /// Builds pagination for `total` items split into pages of `limit`.
    /// A zero limit is clamped to 1 and a zero page to the first page.
    pub fn compute(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        Self {
            page: page.max(1),
            limit,
            total,
            total_pages: total.div_ceil(u64::from(limit)),
        }
    }
}

/// Uniform envelope every API call resolves to.
///
/// `succeeded` mirrors the body's `success` flag when an enveloped body
/// carries one, and is true otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub payload: T,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

impl ApiResponse<Value> {
    /// Normalizes a parsed success body. Objects carrying a `data` key are
    /// unpacked; anything else (bare arrays, plain objects, scalars) becomes
    /// the payload as-is.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) if map.contains_key("data") => {
                let payload = map.remove("data").unwrap_or(Value::Null);
                let succeeded = map.get("success").and_then(Value::as_bool).unwrap_or(true);
                if !succeeded {
                    tracing::debug!("Backend flagged a 2xx response as unsuccessful");
                }
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let pagination = map
                    .remove("pagination")
                    .or_else(|| map.remove("meta"))
                    .and_then(|p| serde_json::from_value(p).ok());
                ApiResponse {
                    payload,
                    succeeded,
                    message,
                    pagination,
                }
            }
            other => ApiResponse {
                payload: other,
                succeeded: true,
                message: None,
                pagination: None,
            },
        }
    }

    /// Decodes the payload into `T`, keeping the envelope metadata.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, serde_json::Error> {
        Ok(ApiResponse {
            payload: serde_json::from_value(self.payload)?,
            succeeded: self.succeeded,
            message: self.message,
            pagination: self.pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_info_ceiling() {
        let info = PageInfo::compute(1, 12, 101);
        assert_eq!(info.total_pages, 9);
        assert_eq!(PageInfo::compute(1, 12, 0).total_pages, 0);
        assert_eq!(PageInfo::compute(1, 12, 12).total_pages, 1);
    }

    #[test]
    fn page_info_clamps_zero_limit() {
        let info = PageInfo::compute(0, 0, 5);
        assert_eq!(info.page, 1);
        assert_eq!(info.limit, 1);
        assert_eq!(info.total_pages, 5);
    }

    #[test]
    fn bare_array_is_wrapped() {
        let resp = ApiResponse::from_body(json!([1, 2, 3]));
        assert!(resp.succeeded);
        assert_eq!(resp.payload, json!([1, 2, 3]));
        assert!(resp.message.is_none());
        assert!(resp.pagination.is_none());
    }

    #[test]
    fn bare_object_without_data_is_wrapped() {
        let body = json!({"success": true, "message": "Merci"});
        let resp = ApiResponse::from_body(body.clone());
        assert_eq!(resp.payload, body);
    }

    #[test]
    fn data_envelope_is_unpacked() {
        let resp = ApiResponse::from_body(json!({
            "success": true,
            "message": "ok",
            "data": [{"id": 1}],
            "pagination": {"page": 2, "limit": 10, "total": 35, "totalPages": 4}
        }));
        assert_eq!(resp.payload, json!([{"id": 1}]));
        assert_eq!(resp.message.as_deref(), Some("ok"));
        assert_eq!(resp.pagination, Some(PageInfo::compute(2, 10, 35)));
    }

    #[test]
    fn success_flag_defaults_to_true_and_is_honored() {
        assert!(ApiResponse::from_body(json!({"data": null})).succeeded);
        let resp = ApiResponse::from_body(json!({"success": false, "data": null, "message": "Refusé"}));
        assert!(!resp.succeeded);
        assert_eq!(resp.message.as_deref(), Some("Refusé"));
    }

    #[test]
    fn laravel_style_meta_is_read() {
        let resp = ApiResponse::from_body(json!({
            "data": [],
            "meta": {"current_page": 1, "per_page": 15, "total": 0, "last_page": 0}
        }));
        assert_eq!(resp.pagination, Some(PageInfo::compute(1, 15, 0)));
    }

    #[test]
    fn decode_keeps_metadata() {
        let resp = ApiResponse::from_body(json!({"data": ["a"], "message": "hi"}));
        let typed: ApiResponse<Vec<String>> = resp.decode().unwrap();
        assert_eq!(typed.payload, vec!["a".to_string()]);
        assert_eq!(typed.message.as_deref(), Some("hi"));
    }
}
