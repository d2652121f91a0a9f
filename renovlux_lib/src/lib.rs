//! Library layer for Renovlux: resource services, fetch hooks, the app store
//! and the local cart.
//!
//! Wraps the `renovlux_api` client with payload mapping, user-facing error
//! messages, generation-guarded fetch state, contact validation and a
//! SQLite-backed key-value store for the cart.

pub mod cart;
pub mod config;
pub mod error;
pub mod hooks;
pub mod mapping;
pub mod messages;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
pub mod validation;

pub use renovlux_api;
pub use renovlux_api::types;
pub use renovlux_api::{Client, ListQuery, PaginationOptions, Query, SearchQuery, SortOrder};

pub use cart::{CartEntry, CartStore, CART_KEY};
pub use config::Config;
pub use error::LibError;
pub use messages::handle_api_error;
pub use services::{ContactApi, Page, PortfolioApi, ProductsApi, ServicesApi};
pub use state::{FetchAction, FetchState};
pub use storage::{LocalStorage, StorageError};
pub use store::{AppAction, AppState, AppStore};
