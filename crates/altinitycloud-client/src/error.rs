//! Altinity.Cloud client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AltinityCloudError {
    #[error("could not create http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("could not create request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    #[error("could not do request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("status: {status}, body: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("could not unmarshal data: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("could not marshal tolerations: {0}")]
    Marshal(#[source] serde_json::Error),

    #[error("node type not found: {name} (environment {env_id})")]
    NodeTypeNotFound { env_id: String, name: String },
}

impl AltinityCloudError {
    /// HTTP status returned by the control plane, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            AltinityCloudError::ApiStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AltinityCloudError>;
