//! State models for data sources and resources
//!
//! Attribute names are snake_case, as they appear in provider configuration.

use altinitycloud_client::{NodeType, Toleration, User};
use serde::{Deserialize, Serialize};

// ============ node_type data source ============

/// Configuration + state of the `node_type` data source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeTypeDataSourceModel {
    pub env_id: String,

    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub data: Vec<NodeTypeModel>,
}

/// A node type as exposed by the `node_type` data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeModel {
    pub id: i64,
    pub scope: String,
    pub code: String,
    pub name: String,
    pub pool: String,
    pub storage_class: String,
    pub cpu: String,
    pub memory: String,
    pub id_environment: String,
    pub extra_spec: String,
    pub tolerations: Vec<TolerationModel>,
    pub node_selector: String,
    pub cpu_alloc: String,
    pub memory_alloc: String,
}

impl From<&NodeType> for NodeTypeModel {
    fn from(nt: &NodeType) -> Self {
        let id = nt.id.parse::<i64>().unwrap_or_else(|e| {
            tracing::error!("could not parse node type id {:?}: {}", nt.id, e);
            0
        });

        Self {
            id,
            scope: nt.scope.clone(),
            code: nt.code.clone(),
            name: nt.name.clone(),
            pool: nt.pool.clone(),
            storage_class: nt.storage_class.clone(),
            cpu: nt.cpu.clone(),
            memory: nt.memory.clone(),
            id_environment: nt.id_environment.clone(),
            extra_spec: nt.extra_spec.clone().unwrap_or_default(),
            tolerations: nt.tolerations.iter().map(TolerationModel::from).collect(),
            node_selector: nt.node_selector.clone().unwrap_or_default(),
            cpu_alloc: nt.cpu_alloc.clone().unwrap_or_default(),
            memory_alloc: nt.memory_alloc.clone().unwrap_or_default(),
        }
    }
}

/// Kubernetes toleration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TolerationModel {
    pub key: String,
    pub operator: String,
    pub effect: String,
    pub value: String,
}

impl From<&Toleration> for TolerationModel {
    fn from(t: &Toleration) -> Self {
        Self {
            key: t.key.clone(),
            operator: t.operator.clone(),
            effect: t.effect.clone(),
            value: t.value.clone(),
        }
    }
}

impl From<&TolerationModel> for Toleration {
    fn from(t: &TolerationModel) -> Self {
        Self {
            key: t.key.clone(),
            operator: t.operator.clone(),
            value: t.value.clone(),
            effect: t.effect.clone(),
        }
    }
}

// ============ users data source ============

/// Configuration + state of the `users` data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersDataSourceModel {
    pub cluster_id: String,

    #[serde(default)]
    pub users: Vec<UserModel>,
}

/// A user in an Altinity.Cloud cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: String,
    pub login: String,
    pub password: String,
    /// Newline-separated, e.g. "0.0.0.0/0\n::/0"
    pub networks: String,
    /// Newline-separated, e.g. "default\nanother_db"
    pub databases: String,
    pub profile_id: String,
    pub quota_id: String,
    pub access_management: bool,
    pub system: bool,
}

impl From<&User> for UserModel {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            login: user.login.clone(),
            password: user.password.clone(),
            networks: user.networks.clone(),
            databases: user.databases.clone(),
            profile_id: user.id_profile.clone(),
            quota_id: user.id_quota.clone(),
            access_management: user.access_management,
            system: user.system,
        }
    }
}

// ============ node_type resource ============

/// Plan + state of the `node_type` resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeResourceModel {
    pub env_id: String,

    /// Assigned by Altinity.Cloud on create
    #[serde(default)]
    pub id: String,

    pub name: String,
    pub scope: String,
    pub code: String,
    pub storage_class: String,
    pub cpu: String,
    pub memory: String,

    #[serde(default)]
    pub pool: String,

    #[serde(default)]
    pub node_selector: String,

    #[serde(default)]
    pub tolerations: Vec<TolerationModel>,

    #[serde(default)]
    pub extra_spec: String,

    #[serde(default)]
    pub cpu_alloc: String,

    #[serde(default)]
    pub memory_alloc: String,
}

impl NodeTypeResourceModel {
    /// Build resource state from an API node type
    pub fn from_node_type(env_id: impl Into<String>, nt: &NodeType) -> Self {
        Self {
            env_id: env_id.into(),
            id: nt.id.clone(),
            name: nt.name.clone(),
            scope: nt.scope.clone(),
            code: nt.code.clone(),
            storage_class: nt.storage_class.clone(),
            cpu: nt.cpu.clone(),
            memory: nt.memory.clone(),
            pool: nt.pool.clone(),
            node_selector: nt.node_selector.clone().unwrap_or_default(),
            tolerations: nt.tolerations.iter().map(TolerationModel::from).collect(),
            extra_spec: nt.extra_spec.clone().unwrap_or_default(),
            cpu_alloc: nt.cpu_alloc.clone().unwrap_or_default(),
            memory_alloc: nt.memory_alloc.clone().unwrap_or_default(),
        }
    }

    /// Build the API payload from a plan; computed attributes are not sent
    pub fn to_node_type(&self) -> NodeType {
        NodeType {
            id: self.id.clone(),
            scope: self.scope.clone(),
            code: self.code.clone(),
            name: self.name.clone(),
            pool: self.pool.clone(),
            storage_class: self.storage_class.clone(),
            cpu: self.cpu.clone(),
            memory: self.memory.clone(),
            id_environment: self.env_id.clone(),
            extra_spec: None,
            tolerations: self.tolerations.iter().map(Toleration::from).collect(),
            node_selector: Some(self.node_selector.clone()).filter(|s| !s.is_empty()),
            cpu_alloc: None,
            memory_alloc: None,
        }
    }
}
