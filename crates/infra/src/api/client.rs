//! HTTP client for the BRICK backend
//!
//! One `reqwest` client shared by every gateway. Requests are issued exactly
//! once: a failure is reported to the caller and never replayed here. The
//! notification poller compensates for outages by stretching its own
//! schedule, and interactive calls leave the retry decision to the user.

use std::sync::Arc;
use std::time::Duration;

use brick_domain::constants::{API_PREFIX, DEFAULT_REQUEST_TIMEOUT_SECS};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::errors::ApiError;
use super::token::AccessTokenProvider;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the backend, without the `/api` prefix
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Shared HTTP client with bearer-token injection
pub struct ApiClient {
    http: reqwest::Client,
    auth: Arc<dyn AccessTokenProvider>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, auth, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Execute a GET request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, &[], None).await?;
        Self::parse(response).await
    }

    /// Execute a GET request with query parameters
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, query, None).await?;
        Self::parse(response).await
    }

    /// Execute a POST request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Client(format!("Failed to serialize body: {e}")))?;
        let response = self.execute(Method::POST, path, &[], Some(body)).await?;
        Self::parse(response).await
    }

    /// Execute a PATCH request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Client(format!("Failed to serialize body: {e}")))?;
        let response = self.execute(Method::PATCH, path, &[], Some(body)).await?;
        Self::parse(response).await
    }

    /// Execute a DELETE request, discarding any response body
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// Build, send and status-check one request
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}{}", self.config.base_url.trim_end_matches('/'), API_PREFIX, path);

        debug!(url = %url, method = %method, "API request");

        let mut request = self.http.request(method, &url).header("Content-Type", "application/json");

        // Read the token per request; anonymous calls simply omit the header
        if let Some(token) = self.auth.access_token().await? {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(self.config.timeout)
            } else {
                ApiError::Network(format!("Request to {url} failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &url, &body));
        }

        Ok(response)
    }

    /// Deserialize a successful response, treating 204/205 as JSON null
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Client(format!(
                    "No content response ({}), but response type expects a body",
                    status.as_u16()
                ))
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("Failed to parse response: {e}")))
    }

    fn map_status_error(status: StatusCode, url: &str, body: &str) -> ApiError {
        // Prefer the backend's own detail string so validation and auth
        // messages reach the user unmangled
        let message = ApiError::detail_from_body(body).unwrap_or_else(|| {
            if body.is_empty() {
                format!("{url} returned status {status}")
            } else {
                format!("{url} returned status {status}: {body}")
            }
        });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            s if s.is_client_error() => ApiError::Client(message),
            s if s.is_server_error() => ApiError::Server(message),
            _ => ApiError::Network(message),
        }
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: ApiClientConfig,
}

impl ApiClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the client with the given token provider
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the HTTP client cannot be constructed.
    pub fn build(self, auth: Arc<dyn AccessTokenProvider>) -> Result<ApiClient, ApiError> {
        ApiClient::new(self.config, auth)
    }
}
