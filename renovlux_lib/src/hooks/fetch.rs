use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use renovlux_api::types::PageInfo;
use tokio::sync::watch;

use crate::error::LibError;
use crate::messages::handle_api_error;
use crate::services::Page;
use crate::state::{FetchAction, FetchState};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

type Loader<P, T> = Arc<dyn Fn(P) -> BoxFuture<Result<Fetched<T>, LibError>> + Send + Sync>;

/// What a loader produced: the data plus pagination for list endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub pagination: Option<PageInfo>,
}

impl<T> Fetched<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            pagination: None,
        }
    }
}

impl<T> Fetched<Vec<T>> {
    pub fn from_page(page: Page<T>) -> Self {
        Self {
            data: page.items,
            pagination: page.pagination,
        }
    }
}

/// What to do when the parameters are blank (empty id, slug, query...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankParams {
    /// Blank parameters are fetched like any other.
    #[default]
    Fetch,
    /// Nothing happens; the previous state stays.
    Skip,
    /// The state is emptied without calling the loader.
    Clear,
}

pub struct HookOptions<P> {
    /// Quiet period before a parameter change fires. Mount and parameter
    /// changes are debounced; `refetch` is not.
    pub debounce: Option<Duration>,
    pub blank: BlankParams,
    pub is_blank: fn(&P) -> bool,
}

fn never_blank<P>(_: &P) -> bool {
    false
}

impl<P> Default for HookOptions<P> {
    fn default() -> Self {
        Self {
            debounce: None,
            blank: BlankParams::Fetch,
            is_blank: never_blank::<P>,
        }
    }
}

impl<P> HookOptions<P> {
    pub fn skip_blank(is_blank: fn(&P) -> bool) -> Self {
        Self {
            blank: BlankParams::Skip,
            is_blank,
            ..Self::default()
        }
    }
}

struct Inner<P, T> {
    params: Mutex<P>,
    loader: Loader<P, T>,
    state: watch::Sender<FetchState<T>>,
    /// Generations handed out so far, including debounced ones not fired yet.
    issued: AtomicU64,
    options: HookOptions<P>,
}

impl<P, T: Default> Inner<P, T> {
    fn dispatch(&self, action: FetchAction<T>) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = current.reduce(action);
        });
    }

    /// Applies the outcome of `generation` only if no newer cycle has been
    /// issued since, including one still waiting out its debounce.
    fn settle(&self, generation: u64, action: FetchAction<T>) {
        self.state.send_if_modified(|state| {
            if self.issued.load(Ordering::SeqCst) != generation {
                tracing::debug!("Generation {} superseded, result dropped", generation);
                return false;
            }
            let current = std::mem::take(state);
            *state = current.reduce(action);
            true
        });
    }
}

/// A mounted fetch hook: one loader, its current parameters, and the state
/// of the latest fetch cycle.
///
/// Cycles run on spawned tokio tasks, so a hook must be mounted inside a
/// runtime. Dropping the hook unmounts it: results of cycles still in flight
/// are thrown away.
pub struct Hook<P, T> {
    inner: Arc<Inner<P, T>>,
}

impl<P, T> Hook<P, T>
where
    P: Clone + Send + Sync + 'static,
    T: Clone + Default + Send + Sync + 'static,
{
    /// Creates the hook and starts its first cycle.
    pub fn mount<F, Fut>(params: P, options: HookOptions<P>, load: F) -> Self
    where
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Fetched<T>, LibError>> + Send + 'static,
    {
        let loader: Loader<P, T> =
            Arc::new(move |p: P| -> BoxFuture<Result<Fetched<T>, LibError>> { Box::pin(load(p)) });
        let (state, _) = watch::channel(FetchState::default());
        let hook = Self {
            inner: Arc::new(Inner {
                params: Mutex::new(params),
                loader,
                state,
                issued: AtomicU64::new(0),
                options,
            }),
        };
        hook.trigger(true);
        hook
    }

    pub fn params(&self) -> P {
        self.inner
            .params
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Replaces the parameters. A new cycle starts only if they changed.
    pub fn set_params(&self, params: P)
    where
        P: PartialEq,
    {
        {
            let mut current = self.inner.params.lock().unwrap_or_else(|e| e.into_inner());
            if *current == params {
                return;
            }
            *current = params;
        }
        self.trigger(true);
    }

    /// Replays the cycle with the current parameters, without debounce.
    pub fn refetch(&self) {
        self.trigger(false);
    }

    pub fn state(&self) -> FetchState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.inner.state.subscribe()
    }

    /// Resolves once every cycle issued so far has settled or been superseded.
    pub async fn wait_idle(&self) {
        let mut rx = self.inner.state.subscribe();
        let issued = &self.inner.issued;
        // The sender lives in `inner`, which we borrow, so the channel stays open.
        let _ = rx
            .wait_for(|state| state.settled >= issued.load(Ordering::SeqCst))
            .await;
    }

    fn trigger(&self, debounced: bool) {
        let inner = &self.inner;
        let params = self.params();

        if (inner.options.is_blank)(&params) {
            match inner.options.blank {
                BlankParams::Fetch => {}
                BlankParams::Skip => {
                    tracing::debug!("Blank parameters, fetch skipped");
                    return;
                }
                BlankParams::Clear => {
                    let generation = inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
                    inner.dispatch(FetchAction::Cleared { generation });
                    return;
                }
            }
        }

        let generation = inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let delay = inner.options.debounce.filter(|_| debounced);
        if delay.is_none() {
            inner.dispatch(FetchAction::Started { generation });
        }

        let weak: Weak<Inner<P, T>> = Arc::downgrade(inner);
        let loader = Arc::clone(&inner.loader);
        tokio::spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.issued.load(Ordering::SeqCst) != generation {
                    tracing::debug!("Generation {} superseded during debounce", generation);
                    return;
                }
                inner.dispatch(FetchAction::Started { generation });
            }

            let result = loader(params).await;

            let Some(inner) = weak.upgrade() else {
                tracing::debug!("Hook unmounted, dropping result of generation {}", generation);
                return;
            };
            let action = match result {
                Ok(fetched) => FetchAction::Loaded {
                    generation,
                    data: fetched.data,
                    pagination: fetched.pagination,
                },
                Err(e) => {
                    tracing::warn!("Fetch cycle {} failed: {}", generation, e);
                    FetchAction::Failed {
                        generation,
                        error: handle_api_error(&e),
                    }
                }
            };
            inner.settle(generation, action);
        });
    }
}
