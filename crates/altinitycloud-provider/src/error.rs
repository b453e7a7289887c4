//! Provider error types

use crate::diagnostics::Diagnostic;
use altinitycloud_client::AltinityCloudError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Altinity.Cloud client error: {0}")]
    Client(#[from] AltinityCloudError),

    #[error("Invalid state: {0}")]
    InvalidState(#[from] serde_json::Error),

    #[error("Provider has not been configured")]
    NotConfigured,

    #[error("Missing attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("Unknown type: {0}")]
    UnknownType(String),
}

impl ProviderError {
    /// Convert into a user-facing diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ProviderError::Client(e) => Diagnostic::error(
                "Client Error",
                format!("Unable to call the Altinity.Cloud API, got error: {}", e),
            ),
            ProviderError::InvalidState(e) => Diagnostic::error(
                "Invalid State",
                format!("The configuration or state does not match the schema: {}", e),
            ),
            ProviderError::NotConfigured => Diagnostic::error(
                "Unconfigured Provider",
                "The Altinity.Cloud client is not available. \
                 Please report this issue to the provider developers.",
            ),
            ProviderError::MissingAttribute(attr) => Diagnostic::error(
                "Missing Attribute",
                format!("The {} attribute is empty, so the object cannot be addressed", attr),
            )
            .with_attribute(*attr),
            ProviderError::UnknownType(name) => Diagnostic::error(
                "Unknown Type",
                format!("No data source or resource is registered as {}", name),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
