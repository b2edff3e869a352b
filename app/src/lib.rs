//! # Nectar App
//!
//! Application state for the nectar literature-discovery client: domain
//! types, the pure reducer, one-time hydration, and the task-scoped store
//! context.
//!
//! ## Lifecycle
//!
//! 1. The bootstrap builds an [`AppEnvironment`] (storage + session source)
//!    and calls [`hydrated_store`], which reconciles defaults, the persisted
//!    snapshot, and the server session into the initial state exactly once.
//! 2. Collaborators dispatch [`AppAction`]s; the store reduces them and
//!    persists the redacted snapshot after each one.
//! 3. UI code reaches the store through [`context::provide`] /
//!    [`context::current`].

/// Task-scoped store provider and accessor
pub mod context;
/// One-time hydration of the application state
pub mod hydrate;
/// Reducer and injected environment
pub mod reducer;
/// Store construction
pub mod store;
/// Domain types
pub mod types;

pub use context::{current, provide};
pub use hydrate::{hydrate, resolve_session_user};
pub use reducer::{AppEnvironment, AppReducer};
pub use store::{hydrated_store, AppStore};
pub use types::{
    AppAction, AppState, SessionPayload, StoredSnapshot, Theme, User, APP_STORAGE_KEY,
    SESSION_ELEMENT_ID,
};
