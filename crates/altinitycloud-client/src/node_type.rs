//! Node type endpoints

use crate::client::AltinityCloudClient;
use crate::error::{AltinityCloudError, Result};
use crate::model::{ListResponse, MutationResponse, NodeType};
use reqwest::Method;

impl AltinityCloudClient {
    /// List all node types in an environment
    pub async fn list_node_types(&self, env_id: &str) -> Result<Vec<NodeType>> {
        let builder = self.request(Method::GET, &format!("/environment/{}/nodetypes", env_id));

        let response: ListResponse<NodeType> = self.send_json(builder, None).await?;
        Ok(response.data)
    }

    /// Find a node type by name
    ///
    /// Names are not guaranteed unique; the first match in list order wins.
    pub async fn get_node_type(&self, env_id: &str, name: &str) -> Result<Option<NodeType>> {
        let node_types = self.list_node_types(env_id).await?;
        Ok(node_types.into_iter().find(|nt| nt.name == name))
    }

    /// Create a node type in an environment
    pub async fn create_node_type(&self, env_id: &str, node_type: &NodeType) -> Result<NodeType> {
        let params = write_params(node_type)?;
        let builder = self
            .request(Method::POST, &format!("/environment/{}/nodetypes", env_id))
            .query(&params);

        tracing::info!("Creating node type {} in environment {}", node_type.name, env_id);
        let response: MutationResponse<NodeType> = self.send_json(builder, None).await?;
        tracing::debug!(
            "node type {} created: changed={}",
            response.data.id,
            response.metadata.changed
        );

        Ok(response.data)
    }

    /// Update a node type, resolving its id by name
    pub async fn update_node_type(&self, env_id: &str, node_type: &NodeType) -> Result<NodeType> {
        let existing = self.get_node_type(env_id, &node_type.name).await?.ok_or_else(|| {
            AltinityCloudError::NodeTypeNotFound {
                env_id: env_id.to_string(),
                name: node_type.name.clone(),
            }
        })?;

        let params = write_params(node_type)?;
        let builder = self
            .request(Method::POST, &format!("/nodetype/{}", existing.id))
            .query(&params);

        tracing::info!("Updating node type {} ({})", node_type.name, existing.id);
        let response: MutationResponse<NodeType> = self.send_json(builder, None).await?;
        tracing::debug!("node type {} updated: changed={}", existing.id, response.metadata.changed);

        Ok(response.data)
    }

    /// Delete a node type by id
    pub async fn delete_node_type(&self, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/nodetype/{}", id));

        tracing::info!("Deleting node type {}", id);
        self.send(builder, None).await?;
        Ok(())
    }
}

/// Query parameters shared by create and update
///
/// Required fields always come first and in a fixed order; optional ones are
/// only sent when non-empty.
fn write_params(node_type: &NodeType) -> Result<Vec<(&'static str, String)>> {
    let mut params = vec![
        ("name", node_type.name.clone()),
        ("scope", node_type.scope.clone()),
        ("code", node_type.code.clone()),
        ("storageClass", node_type.storage_class.clone()),
        ("cpu", node_type.cpu.clone()),
        ("memory", node_type.memory.clone()),
    ];

    if !node_type.pool.is_empty() {
        params.push(("pool", node_type.pool.clone()));
    }

    if let Some(node_selector) = node_type.node_selector.as_deref().filter(|s| !s.is_empty()) {
        params.push(("nodeSelector", node_selector.to_string()));
    }

    if !node_type.tolerations.is_empty() {
        let tolerations =
            serde_json::to_string(&node_type.tolerations).map_err(AltinityCloudError::Marshal)?;
        params.push(("tolerations", tolerations));
    }

    Ok(params)
}
