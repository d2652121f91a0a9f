//! HTTP client for the Renovlux backend API.

use std::time::{Duration, Instant};

use reqwest::multipart::Form;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{query::Query, types::ApiResponse, Error};

/// Backend used when no base URL is configured (local development server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Budget for a whole request, response body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

enum Body {
    Empty,
    Json(String),
    Multipart(Form),
}

/// HTTP client for the Renovlux backend.
///
/// Every call resolves to an [`ApiResponse`] envelope or a typed [`Error`];
/// transport exceptions never escape. Each request builds a fresh
/// `reqwest::Client` and races it against the configured timeout.
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    /// Header overrides merged over the JSON defaults. Later entries win.
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at the local development backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for configuration and wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request, replacing a default of the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn get_url(&self, endpoint: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, endpoint).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed for {}: {}", endpoint, e);
            Error::Network(format!("Invalid URL: {}", e))
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Defaults merged with overrides, case-insensitively. Multipart uploads
    /// drop `Content-Type` so the transport can set the boundary.
    fn merged_headers(&self, multipart: bool) -> Vec<(String, String)> {
        let mut merged: Vec<(String, String)> = DEFAULT_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (name, value) in &self.headers {
            merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            merged.push((name.clone(), value.clone()));
        }
        if multipart {
            merged.retain(|(name, _)| !name.eq_ignore_ascii_case("content-type"));
        }
        merged
    }

    /// `GET endpoint?query`.
    pub async fn get<T, Q>(&self, endpoint: &str, query: Option<&Q>) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(endpoint, query)?;
        self.request(Method::GET, url, Body::Empty).await
    }

    /// `POST endpoint` with an optional JSON body.
    pub async fn post<T, B>(&self, endpoint: &str, body: Option<&B>) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(endpoint, None::<&NoQuery>)?;
        self.request(Method::POST, url, json_body(body)?).await
    }

    /// `PUT endpoint` with an optional JSON body.
    pub async fn put<T, B>(&self, endpoint: &str, body: Option<&B>) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(endpoint, None::<&NoQuery>)?;
        self.request(Method::PUT, url, json_body(body)?).await
    }

    /// `DELETE endpoint`.
    pub async fn delete<T>(&self, endpoint: &str) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(endpoint, None::<&NoQuery>)?;
        self.request(Method::DELETE, url, Body::Empty).await
    }

    /// `POST endpoint` with a multipart form (file uploads).
    pub async fn upload<T>(&self, endpoint: &str, form: Form) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(endpoint, None::<&NoQuery>)?;
        self.request(Method::POST, url, Body::Multipart(form)).await
    }

    async fn request<T>(&self, method: Method, url: Url, body: Body) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();
        let label = format!("{} {}", method, url.path());
        tracing::debug!("{} dispatched", label);

        let raw = match tokio::time::timeout(self.timeout, self.dispatch(method, url, body)).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!("{} timed out after {:?}", label, self.timeout);
                return Err(Error::Timeout);
            }
        };

        tracing::debug!("{} completed in {:?}", label, started.elapsed());
        raw.decode::<T>().map_err(|e| {
            tracing::error!("Failed to decode payload of {}: {}", label, e);
            Error::Parse(format!("Unexpected response shape: {}", e))
        })
    }

    async fn dispatch(&self, method: Method, url: Url, body: Body) -> Result<ApiResponse<Value>, Error> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Network(e.to_string())
        })?;

        let multipart = matches!(body, Body::Multipart(_));
        let mut req = client.request(method, url);
        for (name, value) in self.merged_headers(multipart) {
            req = req.header(name, value);
        }
        req = match body {
            Body::Empty => req,
            Body::Json(text) => req.body(text),
            Body::Multipart(form) => req.multipart(form),
        };

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to reach backend: {}", e);
            Error::Network(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e.to_string())
        })?;

        if !status.is_success() {
            let err = http_error(status.as_u16(), &body);
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(err);
        }

        if body.trim().is_empty() {
            return Ok(ApiResponse::from_body(Value::Null));
        }

        let parsed = serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::Parse(format!("Invalid JSON response: {}", e))
        })?;

        Ok(ApiResponse::from_body(parsed))
    }
}

/// Placeholder query type for endpoints that take no parameters.
struct NoQuery;

impl Query for NoQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

fn json_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Body, Error> {
    match body {
        None => Ok(Body::Empty),
        Some(body) => serde_json::to_string(body)
            .map(Body::Json)
            .map_err(|e| Error::Parse(format!("Failed to serialize request body: {}", e))),
    }
}

/// Builds the typed error for a non-success response. A body that is not
/// valid JSON is treated as an empty object.
fn http_error(status: u16, body: &str) -> Error {
    let parsed: Value = serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Default::default()));
    let message = parsed
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP Error: {}", status));
    let code = parsed
        .get("code")
        .and_then(|c| match c {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
    Error::HttpStatus {
        status,
        message,
        code,
    }
}

/// Percent-encodes one path segment (ids, slugs, category names).
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
