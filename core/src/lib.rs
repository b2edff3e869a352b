//! # Nectar Core
//!
//! Core traits and types for the nectar client architecture.
//!
//! This crate provides the fundamental abstractions the client state layer is
//! built from: the Reducer pattern with explicit effects, injected environment
//! capabilities, and the lenient deserialization used at every boundary that
//! carries persisted or embedded data.
//!
//! ## Core Concepts
//!
//! - **State**: the canonical client snapshot for a feature
//! - **Action**: all possible inputs to a reducer
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected capabilities (storage, session source) via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Expected failures travel as `Result` or fall back to a supplied default;
//!   raised faults are reserved for programming-invariant violations
//!
//! ## Example
//!
//! ```ignore
//! use nectar_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for AppReducer {
//!     type State = AppState;
//!     type Action = AppAction;
//!     type Environment = AppEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut AppState,
//!         action: AppAction,
//!         env: &AppEnvironment,
//!     ) -> SmallVec<[Effect<AppAction>; 4]> {
//!         // Business logic goes here
//!         SmallVec::new()
//!     }
//! }
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::SmallVec;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all state-transition logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The client state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected capabilities this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for AppReducer {
    ///     type State = AppState;
    ///     type Action = AppAction;
    ///     type Environment = AppEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut AppState,
    ///         action: AppAction,
    ///         env: &AppEnvironment,
    ///     ) -> SmallVec<[Effect<AppAction>; 4]> {
    ///         match action {
    ///             AppAction::SetTheme(theme) => {
    ///                 state.theme = theme;
    ///                 SmallVec::new()
    ///             }
    ///             _ => SmallVec::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected capabilities
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure, synchronous function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the store
        ///
        /// It must not suspend and must not perform I/O itself.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// State module - snapshot persistence contracts
///
/// State types are owned data, `Clone`-able, and avoid lifetimes. The one
/// contract the store needs from a state type is how to reduce it to the
/// subset that is safe to persist.
pub mod state {
    use serde::Serialize;

    /// Projection of a state snapshot down to its persistable subset.
    ///
    /// The store serializes `Stored` (never the full state) after every
    /// dispatch, so sensitive fields are excluded structurally rather than by
    /// convention: a field that is not part of `Stored` cannot leak into
    /// persistent storage.
    pub trait Redact {
        /// The persisted subset of this state
        type Stored: Serialize + Send + 'static;

        /// Project the snapshot down to its persistable subset
        fn redact(&self) -> Self::Stored;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the store runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }
    }
}

/// Environment module - injected capability traits
///
/// All external dependencies of the state layer are abstracted behind traits
/// and injected via the Environment parameter. The two capabilities the
/// client state layer needs are persistent snapshot storage and the
/// server-injected session source; both have an explicit "absent" shape so
/// hydration is testable without any rendering environment.
pub mod environment {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use thiserror::Error;

    /// Errors that can occur when reading or writing persistent storage
    #[derive(Debug, Error)]
    pub enum StorageError {
        /// The backing store rejected a read
        #[error("storage read failed: {0}")]
        Read(String),

        /// The backing store rejected a write (quota, disabled storage)
        #[error("storage write failed: {0}")]
        Write(String),
    }

    /// Persistent key/value snapshot storage
    ///
    /// The client-side analogue of browser `localStorage`: string keys, string
    /// values, best-effort durability. Callers treat read errors the same as
    /// an absent value and never fail a dispatch on a write error.
    pub trait SnapshotStorage: Send + Sync {
        /// Read the value stored under `key`, if any
        ///
        /// # Errors
        ///
        /// Returns [`StorageError::Read`] when the backing store cannot be read.
        fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

        /// Write `value` under `key`, replacing any previous value
        ///
        /// # Errors
        ///
        /// Returns [`StorageError::Write`] when the backing store rejects the
        /// write (quota exceeded, storage disabled).
        fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
    }

    /// In-process snapshot storage
    ///
    /// Process-lifetime storage backed by a map. Used by tests and by
    /// sessions that run without a durable profile directory.
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        entries: Mutex<HashMap<String, String>>,
    }

    impl MemoryStorage {
        /// Create an empty in-process storage
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl SnapshotStorage for MemoryStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            let entries = self
                .entries
                .lock()
                .map_err(|e| StorageError::Read(e.to_string()))?;
            Ok(entries.get(key).cloned())
        }

        fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self
                .entries
                .lock()
                .map_err(|e| StorageError::Write(e.to_string()))?;
            entries.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// File-backed snapshot storage
    ///
    /// Persists each key as `{dir}/{key}.json`. Keys are fixed program
    /// constants, not user input.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        /// Create storage rooted at `dir`
        ///
        /// The directory is created lazily on first write.
        #[must_use]
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl SnapshotStorage for FileStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            match std::fs::read_to_string(self.path_for(key)) {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StorageError::Read(e.to_string())),
            }
        }

        fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
            std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::Write(e.to_string()))?;
            std::fs::write(self.path_for(key), value)
                .map_err(|e| StorageError::Write(e.to_string()))
        }
    }

    /// Source of the server-injected session payload
    ///
    /// The server-rendering collaborator embeds a serialized session payload
    /// in the initial document. This trait abstracts that lookup: `None`
    /// covers the absent cases (no element, executing outside a document
    /// context during server-side rendering), `Some` carries the raw blob for
    /// the hydration layer to decode.
    pub trait SessionSource: Send + Sync {
        /// The raw serialized session payload, if one is present
        fn session_blob(&self) -> Option<String>;
    }

    /// A session source with no payload (server-side render, anonymous visit)
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NoSession;

    impl SessionSource for NoSession {
        fn session_blob(&self) -> Option<String> {
            None
        }
    }

    /// A session source carrying a fixed payload
    ///
    /// Used by the server bootstrap (which knows the blob it embedded) and by
    /// tests.
    #[derive(Debug, Clone)]
    pub struct StaticSession(String);

    impl StaticSession {
        /// Create a session source yielding `blob`
        #[must_use]
        pub fn new(blob: impl Into<String>) -> Self {
            Self(blob.into())
        }
    }

    impl SessionSource for StaticSession {
        fn session_blob(&self) -> Option<String> {
            Some(self.0.clone())
        }
    }
}

/// Parse module - lenient deserialization
///
/// Persisted snapshots and embedded session payloads are data the program
/// does not control; decoding them must never crash startup.
pub mod parse {
    use serde::de::DeserializeOwned;

    /// Decode `raw` as JSON, falling back to `fallback` on any failure
    ///
    /// Pure and idempotent: malformed input, truncated input, and
    /// shape-mismatched input all yield `fallback`. This is the only way
    /// persisted or embedded data enters the program.
    pub fn safe_parse<T: DeserializeOwned>(raw: &str, fallback: T) -> T {
        serde_json::from_str(raw).unwrap_or(fallback)
    }
}
