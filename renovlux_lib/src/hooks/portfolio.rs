use renovlux_api::types::PortfolioItem;
use renovlux_api::ListQuery;

use super::fetch::{Fetched, Hook, HookOptions};
use super::{blank_key, ItemHook, ListHook};
use crate::services::PortfolioApi;

/// Portfolio list with filters and pagination. Change the query with
/// [`Hook::set_params`].
pub fn mount_portfolio(api: &PortfolioApi, query: ListQuery) -> ListHook<ListQuery, PortfolioItem> {
    let api = api.clone();
    Hook::mount(query, HookOptions::default(), move |query: ListQuery| {
        let api = api.clone();
        async move { api.try_get_all(Some(&query)).await.map(Fetched::from_page) }
    })
}

/// The first `limit` projects. No pagination is reported.
pub fn mount_featured_portfolio(api: &PortfolioApi, limit: u32) -> ListHook<u32, PortfolioItem> {
    let api = api.clone();
    Hook::mount(limit, HookOptions::default(), move |limit: u32| {
        let api = api.clone();
        async move { api.try_get_featured(limit).await.map(Fetched::new) }
    })
}

pub fn mount_portfolio_item(api: &PortfolioApi, id: &str) -> ItemHook<PortfolioItem> {
    let api = api.clone();
    Hook::mount(id.to_string(), HookOptions::skip_blank(blank_key), move |id: String| {
        let api = api.clone();
        async move { api.get_by_id(&id).await.map(|item| Fetched::new(Some(item))) }
    })
}

pub fn mount_portfolio_by_category(
    api: &PortfolioApi,
    category: &str,
) -> ListHook<String, PortfolioItem> {
    let api = api.clone();
    Hook::mount(
        category.to_string(),
        HookOptions::skip_blank(blank_key),
        move |category: String| {
            let api = api.clone();
            async move { api.try_get_by_category(&category).await.map(Fetched::new) }
        },
    )
}
