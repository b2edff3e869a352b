//! # Nectar Runtime
//!
//! Store runtime for the nectar client architecture.
//!
//! This crate provides the Store that coordinates reducer execution, effect
//! handling, and persistence of the redacted state snapshot.
//!
//! ## Core Components
//!
//! - **Store**: owns the canonical state and serializes dispatches
//! - **Effect Executor**: executes effect descriptions and feeds produced
//!   actions back to the reducer
//! - **Snapshot Persistence**: after every dispatch, schedules a
//!   fire-and-forget write of the redacted snapshot to storage
//!
//! ## Example
//!
//! ```ignore
//! use nectar_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment)
//!     .with_persistence(storage, "nectar-app-state");
//!
//! // Send an action
//! store.send(Action::SetTheme(Theme::Astrophysics)).await;
//!
//! // Read state
//! let theme = store.state(|s| s.theme).await;
//! ```

use nectar_core::{
    effect::Effect, environment::SnapshotStorage, reducer::Reducer, state::Redact,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Where dispatched snapshots are persisted.
///
/// Bundles the storage capability with the key the snapshot lives under.
#[derive(Clone)]
struct Persistence {
    storage: Arc<dyn SnapshotStorage>,
    key: String,
}

/// The Store - owns canonical state and runs the dispatch loop
///
/// Dispatches serialize at the state lock: the reducer executes synchronously
/// while holding a write lock, so concurrent `send` calls observe a strict
/// total order of state transitions. Effects and persistence writes run in
/// spawned tasks and never block a dispatch.
///
/// Cloning a Store is cheap and every clone shares the same state; the clone
/// is the unit of distribution to collaborators (handlers, context scopes).
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let store = Store::new(AppState::default(), AppReducer, environment);
/// store.send(AppAction::SetTheme(Theme::General)).await;
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    persistence: Option<Persistence>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + 'static,
    S: Redact + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// The store starts without persistence; attach it with
    /// [`Store::with_persistence`]. The initial state is taken as-is - any
    /// hydration merge happens before construction, exactly once, in the
    /// caller that builds the initial state.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            persistence: None,
        }
    }

    /// Attach snapshot persistence
    ///
    /// After every dispatch the store serializes the redacted snapshot (see
    /// [`Redact`]) and writes it under `key` in `storage`. Writes are
    /// fire-and-forget: they are scheduled after the reducer has run, they do
    /// not block the dispatch, and failures are logged and swallowed.
    #[must_use]
    pub fn with_persistence(mut self, storage: Arc<dyn SnapshotStorage>, key: impl Into<String>) -> Self {
        self.persistence = Some(Persistence {
            storage,
            key: key.into(),
        });
        self
    }

    /// Send an action through the store
    ///
    /// Processing an action:
    /// 1. Takes the state write lock and runs the reducer synchronously
    /// 2. Captures the redacted snapshot for persistence
    /// 3. Releases the lock, then spawns effect execution and the
    ///    persistence write
    ///
    /// `send` returns after starting effect execution, not completion.
    /// Multiple concurrent `send` calls serialize at the reducer level;
    /// persistence writes from rapid dispatches follow last-write-wins, since
    /// each write captures the full snapshot current at its dispatch.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) {
        tracing::debug!("Processing action");

        let (effects, stored) = {
            let mut state = self.state.write().await;
            let effects = self.reducer.reduce(&mut state, action, &self.environment);
            tracing::trace!("Reducer completed, returned {} effects", effects.len());

            // Capture while the lock is held so the write reflects this
            // dispatch, even if later dispatches overtake the write itself.
            let stored = self.persistence.as_ref().map(|_| state.redact());
            (effects, stored)
        };

        for effect in effects {
            self.execute_effect(effect);
        }

        if let (Some(persistence), Some(stored)) = (self.persistence.clone(), stored) {
            Self::schedule_persist(persistence, stored);
        }
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let theme = store.state(|s| s.theme).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// The environment this store was built with
    pub const fn environment(&self) -> &E {
        &self.environment
    }

    /// Execute a single effect description
    ///
    /// `Effect::Future` runs in a spawned task; an action it produces is fed
    /// back through `send` (the feedback loop).
    fn execute_effect(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
            },
            Effect::Future(fut) => {
                tracing::trace!("Executing Effect::Future");
                let store = self.clone();

                tokio::spawn(async move {
                    if let Some(action) = fut.await {
                        tracing::trace!("Effect::Future produced an action, sending to store");
                        store.send(action).await;
                    } else {
                        tracing::trace!("Effect::Future completed with no action");
                    }
                });
            },
            Effect::Parallel(effects) => {
                tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                for effect in effects {
                    self.execute_effect(effect);
                }
            },
        }
    }

    /// Schedule a fire-and-forget snapshot write
    ///
    /// Serialization and the storage write both run off the dispatch path.
    /// Failures (quota, disabled storage, poisoned backend) are logged at
    /// `warn` and swallowed - a failed write never fails the dispatch that
    /// triggered it.
    fn schedule_persist(persistence: Persistence, stored: S::Stored) {
        tokio::spawn(async move {
            let payload = match serde_json::to_string(&stored) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to serialize snapshot, skipping write");
                    return;
                },
            };

            if let Err(e) = persistence.storage.store(&persistence.key, &payload) {
                tracing::warn!(error = %e, key = %persistence.key, "Snapshot write failed");
            }
        });
    }
}

// Manual Clone implementation: state is shared (Arc), reducer and environment
// are cloned. `#[derive(Clone)]` would incorrectly require S: Clone and A: Clone.
impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            persistence: self.persistence.clone(),
        }
    }
}
