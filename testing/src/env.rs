//! Environment builders and failure-injecting doubles for state-layer tests.

use nectar_app::{AppEnvironment, SessionPayload, User};
use nectar_core::environment::{
    MemoryStorage, NoSession, SnapshotStorage, StaticSession, StorageError,
};
use std::sync::Arc;

/// Storage whose every write fails
///
/// Models quota-exceeded or disabled storage. Reads succeed and find
/// nothing, so hydration proceeds from defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStorage;

impl SnapshotStorage for FailingStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn store(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("storage disabled".to_string()))
    }
}

/// Environment with empty in-process storage and no session
#[must_use]
pub fn anonymous_env() -> AppEnvironment {
    AppEnvironment::new(Arc::new(MemoryStorage::new()), Arc::new(NoSession))
}

/// Environment with no persistent storage at all (server-side render)
#[must_use]
pub fn env_without_storage() -> AppEnvironment {
    AppEnvironment::without_storage(Arc::new(NoSession))
}

/// Environment with empty storage and a session payload for `user`
///
/// # Panics
///
/// Panics when the payload cannot be serialized; test construction only.
#[must_use]
#[allow(clippy::expect_used)]
pub fn env_with_session(user: &User) -> AppEnvironment {
    let blob = serde_json::to_string(&SessionPayload {
        user_data: user.clone(),
    })
    .expect("session payload serializes");

    AppEnvironment::new(Arc::new(MemoryStorage::new()), Arc::new(StaticSession::new(blob)))
}

/// Environment whose storage rejects every write
#[must_use]
pub fn env_with_failing_storage() -> AppEnvironment {
    AppEnvironment::new(Arc::new(FailingStorage), Arc::new(NoSession))
}
