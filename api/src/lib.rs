//! # Nectar API Client
//!
//! Typed remote-service access layer for the nectar search API.
//!
//! Domain services declare typed endpoints on top of a shared request base;
//! the base turns every failure a call can hit - transport, HTTP status,
//! body decode - into a typed [`ApiError`] inside a `Result`. Expected
//! failures never cross this boundary as panics or unwinds; the rest of the
//! program pattern-matches.
//!
//! ## Example
//!
//! ```no_run
//! use nectar_api::{ApiClient, LibrariesService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ApiClient::new("https://api.example.com/v1").with_token("token");
//!     let libraries = LibrariesService::new(client);
//!
//!     match libraries.get_library("hubble-2024").await {
//!         Ok(library) => println!("{} documents", library.documents.len()),
//!         Err(e) => eprintln!("library fetch failed: {e}"),
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod libraries;
pub mod models;

// Re-export main types for convenience
pub use client::{ApiClient, RequestConfig};
pub use error::ApiError;
pub use libraries::{
    LibrariesService, LibraryEntityResponse, LibraryListResponse, LibraryMetadata, LibraryUpdates,
};
