use std::time::Duration;

use renovlux_api::types::Product;
use renovlux_api::ListQuery;

use super::fetch::{BlankParams, Fetched, Hook, HookOptions};
use super::{blank_key, ItemHook, ListHook};
use crate::services::ProductsApi;

/// Quiet period before a search query is sent.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub fn mount_products(api: &ProductsApi, query: ListQuery) -> ListHook<ListQuery, Product> {
    let api = api.clone();
    Hook::mount(query, HookOptions::default(), move |query: ListQuery| {
        let api = api.clone();
        async move { api.get_all(Some(&query)).await.map(Fetched::from_page) }
    })
}

pub fn mount_product(api: &ProductsApi, id: &str) -> ItemHook<Product> {
    let api = api.clone();
    Hook::mount(id.to_string(), HookOptions::skip_blank(blank_key), move |id: String| {
        let api = api.clone();
        async move { api.get_by_id(&id).await.map(|p| Fetched::new(Some(p))) }
    })
}

pub fn mount_available_products(api: &ProductsApi) -> ListHook<(), Product> {
    let api = api.clone();
    Hook::mount((), HookOptions::default(), move |()| {
        let api = api.clone();
        async move { api.get_available().await.map(Fetched::new) }
    })
}

pub fn mount_products_by_category(api: &ProductsApi, category: &str) -> ListHook<String, Product> {
    let api = api.clone();
    Hook::mount(
        category.to_string(),
        HookOptions::skip_blank(blank_key),
        move |category: String| {
            let api = api.clone();
            async move { api.get_by_category(&category).await.map(Fetched::new) }
        },
    )
}

/// Live product search. Each keystroke goes through
/// [`Hook::set_params`]; only a query left untouched for
/// [`SEARCH_DEBOUNCE`] reaches the backend. A blank query empties the
/// results at once without a request.
pub fn mount_product_search(api: &ProductsApi, query: &str) -> ListHook<String, Product> {
    let api = api.clone();
    let options = HookOptions {
        debounce: Some(SEARCH_DEBOUNCE),
        blank: BlankParams::Clear,
        is_blank: blank_key,
    };
    Hook::mount(query.to_string(), options, move |q: String| {
        let api = api.clone();
        async move { api.search(&q).await.map(Fetched::new) }
    })
}
