//! Base API client implementation
//!
//! Every domain service funnels its calls through [`ApiClient::request`],
//! which is where arbitrary HTTP failure turns into the typed [`ApiError`]
//! taxonomy. There is deliberately no retry, caching, or timeout policy at
//! this layer; each call is a single attempt and callers wrap it as needed.

use crate::error::ApiError;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

/// Per-call request description
///
/// Built fresh for every call and not retained. `path` is relative to the
/// client's base URL.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL
    pub path: String,
    /// Query parameters, if any
    pub params: Option<Vec<(String, String)>>,
    /// JSON request body, if any
    pub body: Option<serde_json::Value>,
}

impl RequestConfig {
    /// A GET request for `path`
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            params: None,
            body: None,
        }
    }
}

/// Nectar API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new client against `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a session bearer token to every request
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Issue a request and decode the response body as `T`
    ///
    /// All failure paths are captured into the returned `Result`; the future
    /// always resolves and never panics:
    /// - transport failure → [`ApiError::Transport`]
    /// - 401 → [`ApiError::Unauthorized`]
    /// - other non-2xx status → [`ApiError::Status`]
    /// - body decode failure → [`ApiError::Decode`]
    ///
    /// # Errors
    ///
    /// See the failure taxonomy above.
    pub async fn request<T: DeserializeOwned>(&self, config: RequestConfig) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, config.path.trim_start_matches('/'));

        let mut builder = self.client.request(config.method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(params) = &config.params {
            builder = builder.query(params);
        }
        if let Some(body) = &config.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                })
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("https://api.example.com/v1/");
        assert_eq!(client.base_url, "https://api.example.com/v1");
    }

    #[test]
    fn get_config_has_no_params_or_body() {
        let config = RequestConfig::get("biblib/libraries");
        assert_eq!(config.method, Method::GET);
        assert_eq!(config.path, "biblib/libraries");
        assert!(config.params.is_none());
        assert!(config.body.is_none());
    }
}
