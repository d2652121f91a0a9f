//! CLI subcommand implementations.

use anyhow::Result;
use renovlux_lib::hooks::Hook;
use renovlux_lib::FetchState;

pub mod cart;
pub mod contact;
pub mod portfolio;
pub mod products;
pub mod search;
pub mod services;

/// Waits for the hook's pending cycles and returns the settled state. A
/// failed cycle becomes an error carrying its display message.
pub async fn settle<P, T>(hook: &Hook<P, T>) -> Result<FetchState<T>>
where
    P: Clone + Send + Sync + 'static,
    T: Clone + Default + Send + Sync + 'static,
{
    hook.wait_idle().await;
    let state = hook.state();
    if let Some(error) = &state.error {
        anyhow::bail!("{}", error);
    }
    Ok(state)
}
