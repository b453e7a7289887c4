//! Managed resources
//!
//! - `altinitycloud_node_type`: a node type in an environment

use crate::error::{ProviderError, Result};
use crate::model::NodeTypeResourceModel;
use altinitycloud_client::AltinityCloudClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Altinity.Cloud object with a create/read/update/delete lifecycle
#[async_trait]
pub trait Resource: Send + Sync {
    /// Appended to the provider type name (e.g. "_node_type")
    fn type_name_suffix(&self) -> &'static str;

    /// Hand the configured API client to the resource
    fn configure(&mut self, client: Arc<AltinityCloudClient>);

    /// Create the resource described by `plan` and return the new state
    async fn create(&self, plan: serde_json::Value) -> Result<serde_json::Value>;

    /// Refresh `state`; `None` means the resource no longer exists remotely
    async fn read(&self, state: serde_json::Value) -> Result<Option<serde_json::Value>>;

    /// Apply `plan` to an existing resource and return the new state
    async fn update(&self, plan: serde_json::Value) -> Result<serde_json::Value>;

    /// Delete the resource recorded in `state`
    async fn delete(&self, state: serde_json::Value) -> Result<()>;
}

/// `altinitycloud_node_type` resource
#[derive(Default)]
pub struct NodeTypeResource {
    client: Option<Arc<AltinityCloudClient>>,
}

impl NodeTypeResource {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self) -> Result<&AltinityCloudClient> {
        self.client
            .as_deref()
            .ok_or(ProviderError::NotConfigured)
    }

    pub async fn create_model(&self, plan: NodeTypeResourceModel) -> Result<NodeTypeResourceModel> {
        let created = self
            .client()?
            .create_node_type(&plan.env_id, &plan.to_node_type())
            .await?;

        Ok(NodeTypeResourceModel::from_node_type(plan.env_id, &created))
    }

    pub async fn read_model(
        &self,
        state: NodeTypeResourceModel,
    ) -> Result<Option<NodeTypeResourceModel>> {
        let found = self
            .client()?
            .get_node_type(&state.env_id, &state.name)
            .await?;

        match found {
            Some(nt) => Ok(Some(NodeTypeResourceModel::from_node_type(state.env_id, &nt))),
            None => {
                tracing::info!(
                    "node type {} no longer exists in environment {}",
                    state.name,
                    state.env_id
                );
                Ok(None)
            }
        }
    }

    pub async fn update_model(&self, plan: NodeTypeResourceModel) -> Result<NodeTypeResourceModel> {
        let updated = self
            .client()?
            .update_node_type(&plan.env_id, &plan.to_node_type())
            .await?;

        Ok(NodeTypeResourceModel::from_node_type(plan.env_id, &updated))
    }

    pub async fn delete_model(&self, state: NodeTypeResourceModel) -> Result<()> {
        let client = self.client()?;
        if state.id.is_empty() {
            return Err(ProviderError::MissingAttribute("id"));
        }

        client.delete_node_type(&state.id).await?;
        Ok(())
    }
}

#[async_trait]
impl Resource for NodeTypeResource {
    fn type_name_suffix(&self) -> &'static str {
        "_node_type"
    }

    fn configure(&mut self, client: Arc<AltinityCloudClient>) {
        tracing::info!("Configuring node type resource");
        self.client = Some(client);
    }

    async fn create(&self, plan: serde_json::Value) -> Result<serde_json::Value> {
        let plan: NodeTypeResourceModel = serde_json::from_value(plan)?;
        Ok(serde_json::to_value(self.create_model(plan).await?)?)
    }

    async fn read(&self, state: serde_json::Value) -> Result<Option<serde_json::Value>> {
        let state: NodeTypeResourceModel = serde_json::from_value(state)?;
        match self.read_model(state).await? {
            Some(model) => Ok(Some(serde_json::to_value(model)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, plan: serde_json::Value) -> Result<serde_json::Value> {
        let plan: NodeTypeResourceModel = serde_json::from_value(plan)?;
        Ok(serde_json::to_value(self.update_model(plan).await?)?)
    }

    async fn delete(&self, state: serde_json::Value) -> Result<()> {
        let state: NodeTypeResourceModel = serde_json::from_value(state)?;
        self.delete_model(state).await
    }
}
