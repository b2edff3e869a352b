//! Library collections service
//!
//! Typed façade over the library endpoints. Both operations delegate to
//! [`ApiClient::request`] and inherit its non-panicking contract: callers
//! pattern-match the `Result`, there is no implicit default.

use crate::client::{ApiClient, RequestConfig};
use crate::error::ApiError;
use crate::models;
use serde::{Deserialize, Serialize};

/// Descriptive metadata for a single library
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryMetadata {
    /// Library identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// The caller's permission level on this library
    #[serde(default)]
    pub permission: String,
    /// Whether the library is publicly visible
    #[serde(default)]
    pub public: bool,
    /// Number of documents in the library
    #[serde(default)]
    pub num_documents: u64,
    /// Number of collaborating users
    #[serde(default)]
    pub num_users: u64,
    /// Creation timestamp
    #[serde(default)]
    pub date_created: String,
    /// Last-modification timestamp
    #[serde(default)]
    pub date_last_modified: String,
    /// Owning user
    #[serde(default)]
    pub owner: String,
}

/// Summary of server-side maintenance applied when a library was read
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryUpdates {
    /// Number of records refreshed against the canonical index
    #[serde(default)]
    pub num_updated: u64,
    /// Number of duplicate records removed
    #[serde(default)]
    pub duplicates_removed: u64,
    /// Identifier pairs for records that were remapped
    #[serde(default)]
    pub update_list: Vec<serde_json::Value>,
}

/// A single library with its document list
///
/// The declared fields are the projection the application consumes; anything
/// else the server includes in the entity response is dropped on decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntityResponse {
    /// Bibcodes of the documents in the library
    pub documents: Vec<String>,
    /// Maintenance summary for this read
    #[serde(default)]
    pub updates: LibraryUpdates,
    /// Library metadata
    pub metadata: LibraryMetadata,
}

/// The caller's libraries
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryListResponse {
    /// All libraries visible to the caller
    pub libraries: Vec<LibraryMetadata>,
}

/// Typed service for the library endpoints
#[derive(Clone)]
pub struct LibrariesService {
    client: ApiClient,
}

impl LibrariesService {
    /// Create a service over `client`
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a single library with its documents
    ///
    /// `GET {base}/biblib/libraries/{id}`. On success the response is
    /// projected down to `{documents, updates, metadata}`; on failure the
    /// error propagates unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-success statuses, and
    /// decode failures.
    pub async fn get_library(&self, id: &str) -> Result<LibraryEntityResponse, ApiError> {
        let config = RequestConfig::get(format!("{}/{id}", models::LIBRARIES));
        self.client.request(config).await
    }

    /// Fetch all libraries visible to the caller
    ///
    /// `GET {base}/biblib/libraries`; the success payload passes through
    /// unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-success statuses, and
    /// decode failures.
    pub async fn get_libraries(&self) -> Result<LibraryListResponse, ApiError> {
        let config = RequestConfig::get(models::LIBRARIES);
        self.client.request(config).await
    }
}
