//! Application-wide store: one fetch slice per resource, updated through
//! tagged actions and a pure reducer.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use renovlux_api::types::{PortfolioItem, Product, Service};
use tokio::sync::watch;

use crate::error::LibError;
use crate::messages::handle_api_error;
use crate::services::{Page, PortfolioApi, ProductsApi, ServicesApi, DEFAULT_FEATURED_LIMIT};
use crate::state::{FetchAction, FetchState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub services: FetchState<Vec<Service>>,
    pub portfolio: FetchState<Vec<PortfolioItem>>,
    pub products: FetchState<Vec<Product>>,
}

impl AppState {
    pub fn has_errors(&self) -> bool {
        self.services.error.is_some() || self.portfolio.error.is_some() || self.products.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Services(FetchAction<Vec<Service>>),
    Portfolio(FetchAction<Vec<PortfolioItem>>),
    Products(FetchAction<Vec<Product>>),
    ClearErrors,
    Reset,
}

/// Pure transition function of the store. Each slice is reduced by
/// [`FetchState::reduce`], the same reducer the hooks use.
pub fn reduce(state: AppState, action: AppAction) -> AppState {
    let AppState {
        services,
        portfolio,
        products,
    } = state;
    match action {
        AppAction::Services(action) => AppState {
            services: services.reduce(action),
            portfolio,
            products,
        },
        AppAction::Portfolio(action) => AppState {
            services,
            portfolio: portfolio.reduce(action),
            products,
        },
        AppAction::Products(action) => AppState {
            services,
            portfolio,
            products: products.reduce(action),
        },
        AppAction::ClearErrors => AppState {
            services: services.reduce(FetchAction::ClearError),
            portfolio: portfolio.reduce(FetchAction::ClearError),
            products: products.reduce(FetchAction::ClearError),
        },
        AppAction::Reset => AppState {
            services: services.reduce(FetchAction::Reset),
            portfolio: portfolio.reduce(FetchAction::Reset),
            products: products.reduce(FetchAction::Reset),
        },
    }
}

#[derive(Default)]
struct Generations {
    services: AtomicU64,
    portfolio: AtomicU64,
    products: AtomicU64,
}

/// Shared store over the three catalog resources.
///
/// Loaders use the propagating service calls so a failure always lands in
/// the slice's `error`.
pub struct AppStore {
    services_api: ServicesApi,
    portfolio_api: PortfolioApi,
    products_api: ProductsApi,
    state: watch::Sender<AppState>,
    generations: Generations,
}

impl AppStore {
    pub fn new(services_api: ServicesApi, portfolio_api: PortfolioApi, products_api: ProductsApi) -> Self {
        let (state, _) = watch::channel(AppState::default());
        Self {
            services_api,
            portfolio_api,
            products_api,
            state,
            generations: Generations::default(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    pub fn dispatch(&self, action: AppAction) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
    }

    async fn run<T, Fut>(&self, counter: &AtomicU64, wrap: fn(FetchAction<Vec<T>>) -> AppAction, load: Fut)
    where
        Fut: Future<Output = Result<Page<T>, LibError>>,
    {
        let generation = counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(wrap(FetchAction::Started { generation }));
        let action = match load.await {
            Ok(page) => FetchAction::Loaded {
                generation,
                data: page.items,
                pagination: page.pagination,
            },
            Err(e) => {
                tracing::warn!("Store load failed: {}", e);
                FetchAction::Failed {
                    generation,
                    error: handle_api_error(&e),
                }
            }
        };
        self.dispatch(wrap(action));
    }

    pub async fn load_services(&self) {
        let load = async { self.services_api.try_get_all().await.map(page_of) };
        self.run(&self.generations.services, AppAction::Services, load).await
    }

    pub async fn load_active_services(&self) {
        let load = async { self.services_api.try_get_active().await.map(page_of) };
        self.run(&self.generations.services, AppAction::Services, load).await
    }

    pub async fn load_portfolio(&self) {
        let load = self.portfolio_api.try_get_all(None);
        self.run(&self.generations.portfolio, AppAction::Portfolio, load).await
    }

    pub async fn load_featured_portfolio(&self, limit: u32) {
        let load = async { self.portfolio_api.try_get_featured(limit).await.map(page_of) };
        self.run(&self.generations.portfolio, AppAction::Portfolio, load).await
    }

    pub async fn load_products(&self) {
        let load = self.products_api.get_all(None);
        self.run(&self.generations.products, AppAction::Products, load).await
    }

    pub async fn load_available_products(&self) {
        let load = async { self.products_api.get_available().await.map(page_of) };
        self.run(&self.generations.products, AppAction::Products, load).await
    }

    pub fn clear_errors(&self) {
        self.dispatch(AppAction::ClearErrors);
    }

    /// Resets every slice, then reloads active services, featured projects
    /// and available products concurrently.
    pub async fn refresh_all(&self) {
        self.dispatch(AppAction::Reset);
        tokio::join!(
            self.load_active_services(),
            self.load_featured_portfolio(DEFAULT_FEATURED_LIMIT),
            self.load_available_products(),
        );
    }
}

fn page_of<T>(items: Vec<T>) -> Page<T> {
    Page {
        items,
        pagination: None,
    }
}
