//! # Nectar Testing
//!
//! Testing utilities and helpers for the nectar client architecture:
//! a fluent Given-When-Then harness for reducers, environment builders for
//! the application state layer, and failure-injecting storage doubles.

/// Environment builders and storage doubles
pub mod env;

pub use reducer_test::{assertions, ReducerTest};
