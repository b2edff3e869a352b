//! Reducer behavior tests, exercised through the `nectar-testing` harness.

#![allow(clippy::unwrap_used, clippy::panic)]

use nectar_app::{AppAction, AppReducer, AppState, Theme, User};
use nectar_testing::{assertions, env::anonymous_env, ReducerTest};

#[test]
fn set_theme_replaces_theme() {
    ReducerTest::new(AppReducer::new())
        .with_env(anonymous_env())
        .given_state(AppState::default())
        .when_action(AppAction::SetTheme(Theme::Heliophysics))
        .then_state(|state| {
            assert_eq!(state.theme, Theme::Heliophysics);
            assert!(state.user.anonymous);
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn set_user_replaces_user() {
    let user = User {
        username: "ada".to_string(),
        anonymous: false,
        access_token: "t".to_string(),
        expire_in: "300".to_string(),
    };

    ReducerTest::new(AppReducer::new())
        .with_env(anonymous_env())
        .given_state(AppState::default())
        .when_action(AppAction::SetUser(user.clone()))
        .then_state(move |state| {
            assert_eq!(state.user, user);
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn clear_user_restores_anonymous() {
    let signed_in = AppState {
        user: User {
            username: "ada".to_string(),
            anonymous: false,
            access_token: "t".to_string(),
            expire_in: "300".to_string(),
        },
        theme: Theme::EarthScience,
    };

    ReducerTest::new(AppReducer::new())
        .with_env(anonymous_env())
        .given_state(signed_in)
        .when_action(AppAction::ClearUser)
        .then_state(|state| {
            assert_eq!(state.user, User::default());
            // Theme is untouched by identity changes
            assert_eq!(state.theme, Theme::EarthScience);
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}
