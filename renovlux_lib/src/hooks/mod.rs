//! Fetch hooks: mount a resource call, watch its state, change its
//! parameters. Each resource module below builds on [`Hook`].

mod contact;
mod fetch;
mod portfolio;
mod products;
mod services;

pub use self::contact::{ContactHook, ContactState};
pub use self::fetch::{BlankParams, BoxFuture, Fetched, Hook, HookOptions};
pub use self::portfolio::{
    mount_featured_portfolio, mount_portfolio, mount_portfolio_by_category, mount_portfolio_item,
};
pub use self::products::{
    mount_available_products, mount_product, mount_product_search, mount_products,
    mount_products_by_category, SEARCH_DEBOUNCE,
};
pub use self::services::{
    mount_active_services, mount_service, mount_service_by_slug, mount_services,
};

/// Hook whose data is a list.
pub type ListHook<P, T> = Hook<P, Vec<T>>;
/// Hook whose data is a single item, `None` until loaded.
pub type ItemHook<T> = Hook<String, Option<T>>;

#[allow(clippy::ptr_arg)]
fn blank_key(key: &String) -> bool {
    key.trim().is_empty()
}
