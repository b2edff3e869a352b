//! One-time hydration of the application state.
//!
//! Hydration reconciles three sources into the initial in-memory snapshot:
//! compiled-in defaults, the persisted snapshot from a previous session, and
//! the session payload the server embedded in the rendered document. It runs
//! exactly once per store lifetime, synchronously, before the store is
//! considered ready.
//!
//! Precedence: defaults < persisted snapshot < session user. The session
//! payload reflects the current server-authenticated identity, so it always
//! wins over whatever user data defaults would supply. Decode and read
//! failures never fail hydration; the affected source just drops out
//! (availability over strict fidelity of restored state).

use crate::reducer::AppEnvironment;
use crate::types::{AppState, SessionPayload, StoredSnapshot, User, APP_STORAGE_KEY};
use nectar_core::environment::SessionSource;
use nectar_core::parse::safe_parse;

/// Resolve the user identity from the session source
///
/// Yields `fallback` when no payload is present (server-side render,
/// anonymous visit) or when the payload fails to decode.
#[must_use]
pub fn resolve_session_user(session: &dyn SessionSource, fallback: User) -> User {
    match session.session_blob() {
        Some(blob) => match serde_json::from_str::<SessionPayload>(&blob) {
            Ok(payload) => payload.user_data,
            Err(_) => fallback,
        },
        None => fallback,
    }
}

/// Build the initial application state
///
/// With no storage available the default passes through untouched - no merge
/// is attempted. Otherwise the persisted snapshot is merged over the default
/// and the user is overwritten with the session resolution.
#[must_use]
pub fn hydrate(default: AppState, env: &AppEnvironment) -> AppState {
    let Some(storage) = env.storage.as_deref() else {
        return default;
    };

    let stored_text = storage.load(APP_STORAGE_KEY).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not read persisted snapshot, hydrating from defaults");
        None
    });

    let snapshot = stored_text.map_or_else(
        || StoredSnapshot::from(&default),
        |raw| safe_parse(&raw, StoredSnapshot::from(&default)),
    );

    let user = resolve_session_user(env.session.as_ref(), default.user);

    AppState {
        user,
        theme: snapshot.theme,
    }
}
