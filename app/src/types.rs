//! Domain types for the nectar application state.
//!
//! The canonical snapshot is small: the signed-in (or anonymous) user and the
//! active discipline theme. What matters is the split between what may be
//! persisted and what must not - `StoredSnapshot` is the persisted subset and
//! structurally excludes the user.

use nectar_core::state::Redact;
use serde::{Deserialize, Serialize};

/// Storage key for the persisted application snapshot
pub const APP_STORAGE_KEY: &str = "nectar-app-state";

/// Element identifier under which the server renderer embeds the session
/// payload in the initial document
pub const SESSION_ELEMENT_ID: &str = "__session__";

/// Discipline theme selected by the user
///
/// A closed set; anything else in persisted data is a decode failure and
/// falls back to the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
    /// All-disciplines default
    #[default]
    General,
    /// Astrophysics
    Astrophysics,
    /// Heliophysics
    Heliophysics,
    /// Planetary science
    PlanetScience,
    /// Earth science
    EarthScience,
    /// Biological and physical sciences
    BioPhysical,
}

/// The current user identity
///
/// `access_token` is session identity and must never be written to
/// persistent storage; the store persists [`StoredSnapshot`], which has no
/// user field at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, `"anonymous"` when no session resolved
    pub username: String,
    /// True iff no valid session was resolved at hydration time
    pub anonymous: bool,
    /// Session access token (sensitive)
    pub access_token: String,
    /// Token expiry as reported by the server
    pub expire_in: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            username: "anonymous".to_string(),
            anonymous: true,
            access_token: String::new(),
            expire_in: String::new(),
        }
    }
}

/// The canonical client snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Current user identity
    pub user: User,
    /// Active discipline theme
    pub theme: Theme,
}

/// The persisted subset of [`AppState`]: everything except `user`
///
/// Written after every dispatch under [`APP_STORAGE_KEY`], read exactly once
/// at hydration. User identity is re-resolved from the server session on
/// every process start instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSnapshot {
    /// Active discipline theme
    pub theme: Theme,
}

impl From<&AppState> for StoredSnapshot {
    fn from(state: &AppState) -> Self {
        Self { theme: state.theme }
    }
}

impl Redact for AppState {
    type Stored = StoredSnapshot;

    fn redact(&self) -> StoredSnapshot {
        StoredSnapshot::from(self)
    }
}

/// Session payload embedded in the server-rendered document
///
/// Read exactly once during hydration, then discarded; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// The server-authenticated user identity
    #[serde(rename = "userData")]
    pub user_data: User,
}

/// Actions the application state responds to
///
/// Each variant carries only the data the reducer needs; actions are
/// immutable once dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    /// Switch the active theme
    SetTheme(Theme),
    /// Replace the current user identity (e.g. after login)
    SetUser(User),
    /// Drop the current identity back to anonymous (e.g. after logout)
    ClearUser,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_user_is_anonymous() {
        let user = User::default();
        assert!(user.anonymous);
        assert_eq!(user.username, "anonymous");
        assert!(user.access_token.is_empty());
    }

    #[test]
    fn theme_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Theme::PlanetScience).unwrap(),
            "\"PLANET_SCIENCE\""
        );
        assert_eq!(
            serde_json::from_str::<Theme>("\"BIO_PHYSICAL\"").unwrap(),
            Theme::BioPhysical
        );
    }

    #[test]
    fn unknown_theme_is_a_decode_failure() {
        assert!(serde_json::from_str::<Theme>("\"SPACE_WEATHER\"").is_err());
    }

    #[test]
    fn redacted_snapshot_has_no_user_key() {
        let state = AppState {
            user: User {
                username: "ada".to_string(),
                anonymous: false,
                access_token: "secret-token".to_string(),
                expire_in: "3600".to_string(),
            },
            theme: Theme::Astrophysics,
        };

        let value = serde_json::to_value(state.redact()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("user"));

        // And nothing token-shaped leaks through serialization at all
        let raw = serde_json::to_string(&state.redact()).unwrap();
        assert!(!raw.contains("secret-token"));
    }

    #[test]
    fn session_payload_uses_camel_case_key() {
        let raw = "{\"userData\":{\"username\":\"ada\",\"anonymous\":false,\
                   \"access_token\":\"t\",\"expire_in\":\"300\"}}";
        let payload: SessionPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.user_data.username, "ada");
        assert!(!payload.user_data.anonymous);
    }
}
