use renovlux_api::types::Service;

use super::fetch::{Fetched, Hook, HookOptions};
use super::{blank_key, ItemHook, ListHook};
use crate::services::ServicesApi;

pub fn mount_services(api: &ServicesApi) -> ListHook<(), Service> {
    let api = api.clone();
    Hook::mount((), HookOptions::default(), move |()| {
        let api = api.clone();
        async move { api.try_get_all().await.map(Fetched::new) }
    })
}

pub fn mount_active_services(api: &ServicesApi) -> ListHook<(), Service> {
    let api = api.clone();
    Hook::mount((), HookOptions::default(), move |()| {
        let api = api.clone();
        async move { api.try_get_active().await.map(Fetched::new) }
    })
}

pub fn mount_service(api: &ServicesApi, id: &str) -> ItemHook<Service> {
    let api = api.clone();
    Hook::mount(id.to_string(), HookOptions::skip_blank(blank_key), move |id: String| {
        let api = api.clone();
        async move { api.get_by_id(&id).await.map(|s| Fetched::new(Some(s))) }
    })
}

pub fn mount_service_by_slug(api: &ServicesApi, slug: &str) -> ItemHook<Service> {
    let api = api.clone();
    Hook::mount(slug.to_string(), HookOptions::skip_blank(blank_key), move |slug: String| {
        let api = api.clone();
        async move { api.get_by_slug(&slug).await.map(|s| Fetched::new(Some(s))) }
    })
}
