//! The application store: hydration wired to the runtime.

use crate::hydrate::hydrate;
use crate::reducer::{AppEnvironment, AppReducer};
use crate::types::{AppAction, AppState, APP_STORAGE_KEY};
use nectar_runtime::Store;

/// The concrete store for the nectar application state
pub type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

/// Build the application store, hydrating exactly once
///
/// Hydration happens here, synchronously, before the store exists - the
/// Uninitialized → Hydrated transition cannot run twice and cannot race a
/// dispatch. When the environment carries storage, the store persists the
/// redacted snapshot under [`APP_STORAGE_KEY`] after every dispatch.
#[must_use]
pub fn hydrated_store(env: AppEnvironment) -> AppStore {
    let initial = hydrate(AppState::default(), &env);
    let storage = env.storage.clone();

    let store = Store::new(initial, AppReducer::new(), env);
    match storage {
        Some(storage) => store.with_persistence(storage, APP_STORAGE_KEY),
        None => store,
    }
}
