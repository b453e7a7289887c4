//! Provider configuration
//!
//! Values are resolved in this order:
//! 1. Explicit configuration (`api_endpoint`, `api_token`)
//! 2. Environment variables `ALTINITY_CLOUD_ENDPOINT` / `ALTINITY_CLOUD_TOKEN`
//! 3. The default Altinity.Cloud endpoint / an empty token
//!
//! An empty endpoint or token after resolution is a configuration error.

use crate::diagnostics::Diagnostics;
use altinitycloud_client::API_ENDPOINT;
use serde::{Deserialize, Serialize};

pub const ENDPOINT_ENV: &str = "ALTINITY_CLOUD_ENDPOINT";
pub const TOKEN_ENV: &str = "ALTINITY_CLOUD_TOKEN";

/// Provider-level configuration block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_endpoint: Option<String>,

    #[serde(default)]
    pub api_token: Option<String>,
}

/// Configuration after precedence has been applied
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_endpoint: String,
    pub api_token: String,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_endpoint", &self.api_endpoint)
            .field("api_token", &"***")
            .finish()
    }
}

impl ProviderConfig {
    pub fn new(api_endpoint: Option<String>, api_token: Option<String>) -> Self {
        Self {
            api_endpoint,
            api_token,
        }
    }

    /// Apply precedence and check that both values are usable
    pub fn resolve(&self) -> Result<ResolvedConfig, Diagnostics> {
        let api_endpoint = self
            .api_endpoint
            .clone()
            .or_else(|| env_value(ENDPOINT_ENV))
            .unwrap_or_else(|| API_ENDPOINT.to_string());

        let api_token = self
            .api_token
            .clone()
            .or_else(|| env_value(TOKEN_ENV))
            .unwrap_or_default();

        let mut diags = Diagnostics::new();

        if api_endpoint.is_empty() {
            diags.add_attribute_error(
                "api_endpoint",
                "Missing Altinity.Cloud API Endpoint",
                format!(
                    "The provider cannot create the Altinity.Cloud API client as there is a missing or empty value for the API endpoint. \
                     Set the api_endpoint value in the configuration or use the {} environment variable. \
                     If either is already set, ensure the value is not empty.",
                    ENDPOINT_ENV
                ),
            );
        }

        if api_token.is_empty() {
            diags.add_attribute_error(
                "api_token",
                "Missing Altinity.Cloud API Token",
                format!(
                    "The provider cannot create the Altinity.Cloud API client as there is a missing or empty value for the Altinity.Cloud API token. \
                     Set the api_token value in the configuration or use the {} environment variable. \
                     If either is already set, ensure the value is not empty.",
                    TOKEN_ENV
                ),
            );
        }

        if diags.has_error() {
            return Err(diags);
        }

        Ok(ResolvedConfig {
            api_endpoint,
            api_token,
        })
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
