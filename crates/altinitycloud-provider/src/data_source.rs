//! Data sources
//!
//! - `altinitycloud_node_type`: all node types of an environment
//! - `altinitycloud_users`: all users of a cluster

use crate::error::{ProviderError, Result};
use crate::model::{NodeTypeDataSourceModel, NodeTypeModel, UserModel, UsersDataSourceModel};
use altinitycloud_client::AltinityCloudClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only view onto Altinity.Cloud objects
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Appended to the provider type name (e.g. "_node_type")
    fn type_name_suffix(&self) -> &'static str;

    /// Hand the configured API client to the data source
    fn configure(&mut self, client: Arc<AltinityCloudClient>);

    /// Read current state for the given configuration
    async fn read(&self, config: serde_json::Value) -> Result<serde_json::Value>;
}

/// `altinitycloud_node_type` data source
#[derive(Default)]
pub struct NodeTypeDataSource {
    client: Option<Arc<AltinityCloudClient>>,
}

impl NodeTypeDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read_model(
        &self,
        config: NodeTypeDataSourceModel,
    ) -> Result<NodeTypeDataSourceModel> {
        let client = self.client.as_ref().ok_or(ProviderError::NotConfigured)?;

        let node_types = client.list_node_types(&config.env_id).await?;
        tracing::trace!(
            "fetched {} node types from environment {}",
            node_types.len(),
            config.env_id
        );

        Ok(NodeTypeDataSourceModel {
            id: format!("node_type_{}", config.env_id),
            data: node_types.iter().map(NodeTypeModel::from).collect(),
            env_id: config.env_id,
        })
    }
}

#[async_trait]
impl DataSource for NodeTypeDataSource {
    fn type_name_suffix(&self) -> &'static str {
        "_node_type"
    }

    fn configure(&mut self, client: Arc<AltinityCloudClient>) {
        tracing::info!("Configuring node type data source");
        self.client = Some(client);
    }

    async fn read(&self, config: serde_json::Value) -> Result<serde_json::Value> {
        let config: NodeTypeDataSourceModel = serde_json::from_value(config)?;
        let state = self.read_model(config).await?;
        Ok(serde_json::to_value(state)?)
    }
}

/// `altinitycloud_users` data source
#[derive(Default)]
pub struct UsersDataSource {
    client: Option<Arc<AltinityCloudClient>>,
}

impl UsersDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read_model(&self, config: UsersDataSourceModel) -> Result<UsersDataSourceModel> {
        let client = self.client.as_ref().ok_or(ProviderError::NotConfigured)?;

        let users = client.list_users(&config.cluster_id).await?;
        tracing::trace!(
            "fetched {} users from cluster {}",
            users.len(),
            config.cluster_id
        );

        Ok(UsersDataSourceModel {
            users: users.iter().map(UserModel::from).collect(),
            cluster_id: config.cluster_id,
        })
    }
}

#[async_trait]
impl DataSource for UsersDataSource {
    fn type_name_suffix(&self) -> &'static str {
        "_users"
    }

    fn configure(&mut self, client: Arc<AltinityCloudClient>) {
        tracing::info!("Configuring users data source");
        self.client = Some(client);
    }

    async fn read(&self, config: serde_json::Value) -> Result<serde_json::Value> {
        let config: UsersDataSourceModel = serde_json::from_value(config)?;
        let state = self.read_model(config).await?;
        Ok(serde_json::to_value(state)?)
    }
}
