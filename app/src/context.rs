//! Task-scoped access to the application store.
//!
//! The store is created once per session and made available to everything
//! running under a [`provide`] scope; [`current`] is the single shared access
//! point collaborators use to reach `{state, dispatch}`. Requesting the store
//! outside an active scope is a structural wiring defect, not a runtime
//! condition to recover from, so it fails fast instead of returning a
//! default.

use crate::store::AppStore;
use std::future::Future;

tokio::task_local! {
    static CURRENT_STORE: AppStore;
}

/// Run `fut` with `store` available through [`current`]
///
/// Everything the future runs - including functions arbitrarily deep in the
/// call tree - can reach the store without threading it through arguments.
/// Scopes may nest; the innermost provided store wins.
pub async fn provide<F>(store: AppStore, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_STORE.scope(store, fut).await
}

/// The store provided to the current task
///
/// Returns a clone sharing state with the provided store.
///
/// # Panics
///
/// Panics immediately when called outside a [`provide`] scope. This is a
/// programming error (a collaborator wired outside the provider), never an
/// expected runtime failure.
#[must_use]
#[allow(clippy::panic)]
pub fn current() -> AppStore {
    CURRENT_STORE.try_with(Clone::clone).unwrap_or_else(|_| {
        panic!("no application store in scope: current() called outside provide()")
    })
}
