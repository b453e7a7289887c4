//! Altinity.Cloud API client
//!
//! Thin wrapper around `reqwest::Client` that carries the API endpoint and
//! the `X-Auth-Token` used to authenticate every request.

use crate::error::{AltinityCloudError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Altinity.Cloud default API endpoint
pub const API_ENDPOINT: &str = "https://acm.altinity.cloud/api";

/// Header carrying the API token
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Connect + response timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Altinity.Cloud API client
#[derive(Debug, Clone)]
pub struct AltinityCloudClient {
    http: reqwest::Client,
    api_endpoint: String,
    api_token: String,
}

impl AltinityCloudClient {
    /// Create a new client
    ///
    /// A missing endpoint falls back to [`API_ENDPOINT`], a missing token to
    /// the empty string.
    pub fn new(endpoint: Option<String>, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AltinityCloudError::ClientBuild)?;

        Ok(Self {
            http,
            api_endpoint: endpoint.unwrap_or_else(|| API_ENDPOINT.to_string()),
            api_token: token.unwrap_or_default(),
        })
    }

    /// Get the API endpoint
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Get the default API token
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_endpoint, path)
    }

    pub(crate) fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send a request and return the raw body of a `200 OK` response
    ///
    /// `auth_token` overrides the client's token for this call only.
    pub(crate) async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        auth_token: Option<&str>,
    ) -> Result<String> {
        let token = auth_token.unwrap_or(&self.api_token);

        let request = builder
            .header(AUTH_HEADER, token)
            .build()
            .map_err(AltinityCloudError::RequestBuild)?;

        tracing::debug!("{} {}", request.method(), request.url().path());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(AltinityCloudError::Transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(AltinityCloudError::Transport)?;

        if status != reqwest::StatusCode::OK {
            tracing::debug!("request failed with status {}", status.as_u16());
            return Err(AltinityCloudError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Send a request and decode the JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        auth_token: Option<&str>,
    ) -> Result<T> {
        let body = self.send(builder, auth_token).await?;
        serde_json::from_str(&body).map_err(AltinityCloudError::Decode)
    }
}
