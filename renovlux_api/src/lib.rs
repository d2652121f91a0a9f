//! Typed HTTP client for the Renovlux backend: request building, timeouts,
//! response-envelope normalization and the error taxonomy shared by every
//! resource.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{encode_segment, Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{FilterOptions, ListQuery, PaginationOptions, Query, SearchQuery, SortOrder};
