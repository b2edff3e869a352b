//! Service-layer tests against a simulated HTTP dependency.
//!
//! The contract under test: every failure mode resolves to a typed `Err`,
//! and successful entity responses are projected down to the declared shape.

#![allow(clippy::unwrap_used, clippy::panic)]

use nectar_api::{ApiClient, ApiError, LibrariesService};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn entity_body() -> serde_json::Value {
    json!({
        "documents": ["2020ApJ...891L..27F", "2019MNRAS.490.4715S"],
        "updates": {
            "num_updated": 1,
            "duplicates_removed": 0,
            "update_list": []
        },
        "metadata": {
            "id": "hubble-2024",
            "name": "Hubble follow-ups",
            "description": "Candidate follow-up observations",
            "permission": "owner",
            "public": false,
            "num_documents": 2,
            "num_users": 1,
            "date_created": "2024-03-01T10:00:00Z",
            "date_last_modified": "2024-06-11T08:30:00Z",
            "owner": "ada"
        },
        // Fields outside the declared projection
        "solr": {"response": {"numFound": 2}},
        "extra": 1
    })
}

fn service_for(server: &MockServer) -> LibrariesService {
    LibrariesService::new(ApiClient::new(server.uri()))
}

#[tokio::test]
async fn get_library_projects_declared_fields_and_drops_extras() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/biblib/libraries/hubble-2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entity_body()))
        .mount(&server)
        .await;

    let library = service_for(&server)
        .get_library("hubble-2024")
        .await
        .unwrap();

    assert_eq!(library.documents.len(), 2);
    assert_eq!(library.updates.num_updated, 1);
    assert_eq!(library.metadata.name, "Hubble follow-ups");

    // The projection is closed: re-serializing shows only the declared keys
    let value = serde_json::to_value(&library).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    for key in ["documents", "updates", "metadata"] {
        assert!(object.contains_key(key));
    }
    assert!(!object.contains_key("solr"));
    assert!(!object.contains_key("extra"));
}

#[tokio::test]
async fn get_libraries_passes_payload_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/biblib/libraries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "libraries": [
                {"id": "a", "name": "Library A"},
                {"id": "b", "name": "Library B", "public": true}
            ]
        })))
        .mount(&server)
        .await;

    let list = service_for(&server).get_libraries().await.unwrap();

    assert_eq!(list.libraries.len(), 2);
    assert_eq!(list.libraries[0].id, "a");
    assert!(list.libraries[1].public);
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/biblib/libraries"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"libraries": []})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token("session-token");
    let list = LibrariesService::new(client).get_libraries().await.unwrap();
    assert!(list.libraries.is_empty());
}

#[tokio::test]
async fn non_success_status_resolves_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/biblib/libraries/x"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let result = service_for(&server).get_library("x").await;

    match result {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        },
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_resolves_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/biblib/libraries"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = service_for(&server).get_libraries().await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn malformed_body_resolves_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/biblib/libraries/x"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = service_for(&server).get_library("x").await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn transport_failure_resolves_to_transport_error() {
    // Nothing listens here; the connection itself fails
    let client = ApiClient::new("http://127.0.0.1:9");
    let result = LibrariesService::new(client).get_libraries().await;

    assert!(matches!(result, Err(ApiError::Transport(_))));
}
