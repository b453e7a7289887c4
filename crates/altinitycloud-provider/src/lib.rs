//! Altinity.Cloud provider
//!
//! Declarative management of Altinity.Cloud objects on top of
//! [`altinitycloud_client`]. The provider resolves its configuration, builds
//! one shared API client and hands it to every data source and resource.
//!
//! # Data sources
//!
//! - `altinitycloud_node_type`: node types of an environment
//! - `altinitycloud_users`: users of a cluster
//!
//! # Resources
//!
//! - `altinitycloud_node_type`: create, read, update and delete a node type
//!
//! # Example
//!
//! ```ignore
//! use altinitycloud_provider::{AltinityCloudProvider, ProviderConfig};
//!
//! let mut provider = AltinityCloudProvider::new("dev");
//! provider.configure(&ProviderConfig::default())?; // reads ALTINITY_CLOUD_* env vars
//!
//! let ds = provider.data_source("altinitycloud_node_type")?;
//! let state = ds.read(serde_json::json!({ "env_id": "652" })).await?;
//! ```

pub mod config;
pub mod data_source;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod provider;
pub mod resource;

pub use config::{ENDPOINT_ENV, ProviderConfig, ResolvedConfig, TOKEN_ENV};
pub use data_source::{DataSource, NodeTypeDataSource, UsersDataSource};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{ProviderError, Result};
pub use model::{
    NodeTypeDataSourceModel, NodeTypeModel, NodeTypeResourceModel, TolerationModel,
    UserModel, UsersDataSourceModel,
};
pub use provider::{AltinityCloudProvider, TYPE_NAME};
pub use resource::{NodeTypeResource, Resource};
