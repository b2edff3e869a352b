//! Reducer and environment for the nectar application state.
//!
//! The reducer is pure and synchronous: it validates nothing that cannot be
//! expressed in the type system (the action variants already carry exactly
//! what they need) and returns no effects today. Persistence is a store
//! concern, not a reducer concern.

use crate::types::{AppAction, AppState, User};
use nectar_core::environment::{SessionSource, SnapshotStorage};
use nectar_core::{effect::Effect, reducer::Reducer, SmallVec};
use std::sync::Arc;

/// Capabilities injected into the application state layer
///
/// `storage: None` models a context with no persistent storage available
/// (e.g. a server-side render); hydration then skips the merge entirely.
#[derive(Clone)]
pub struct AppEnvironment {
    /// Persistent snapshot storage, when the context provides one
    pub storage: Option<Arc<dyn SnapshotStorage>>,
    /// Source of the server-injected session payload
    pub session: Arc<dyn SessionSource>,
}

impl AppEnvironment {
    /// Create an environment with persistent storage
    #[must_use]
    pub fn new(storage: Arc<dyn SnapshotStorage>, session: Arc<dyn SessionSource>) -> Self {
        Self {
            storage: Some(storage),
            session,
        }
    }

    /// Create an environment without persistent storage
    ///
    /// Used when rendering server-side, where neither storage nor a prior
    /// snapshot exists.
    #[must_use]
    pub fn without_storage(session: Arc<dyn SessionSource>) -> Self {
        Self {
            storage: None,
            session,
        }
    }
}

/// Reducer for the application state
#[derive(Clone, Copy, Debug, Default)]
pub struct AppReducer;

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::SetTheme(theme) => {
                state.theme = theme;
            },
            AppAction::SetUser(user) => {
                state.user = user;
            },
            AppAction::ClearUser => {
                state.user = User::default();
            },
        }

        SmallVec::new()
    }
}
