//! Wire models for the Altinity.Cloud API

use serde::{Deserialize, Deserializer, Serialize};

/// Node type: a named compute/storage profile scoped to one environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub scope: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pool: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub storage_class: String,

    /// CPU request (e.g. "2" or "1500m")
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpu: String,

    /// Memory request (e.g. "8Gi")
    #[serde(default, deserialize_with = "null_as_default")]
    pub memory: String,

    #[serde(rename = "id_environment", default, deserialize_with = "null_as_default")]
    pub id_environment: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_spec: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tolerations: Vec<Toleration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<String>,

    #[serde(rename = "cpu_alloc", default, skip_serializing_if = "Option::is_none")]
    pub cpu_alloc: Option<String>,

    #[serde(rename = "memory_alloc", default, skip_serializing_if = "Option::is_none")]
    pub memory_alloc: Option<String>,
}

/// Kubernetes-style toleration attached to a node type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toleration {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub operator: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub effect: String,
}

/// ClickHouse user in an Altinity.Cloud cluster (read-only)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,

    /// Newline-separated networks, e.g. "0.0.0.0/0\n::/0"
    #[serde(default, deserialize_with = "null_as_default")]
    pub networks: String,

    /// Newline-separated database names
    #[serde(default, deserialize_with = "null_as_default")]
    pub databases: String,

    #[serde(rename = "id_cluster", default, deserialize_with = "null_as_default")]
    pub id_cluster: String,

    #[serde(rename = "id_profile", default, deserialize_with = "null_as_default")]
    pub id_profile: String,

    #[serde(rename = "id_quota", default, deserialize_with = "null_as_default")]
    pub id_quota: String,

    #[serde(rename = "accessManagement", default, deserialize_with = "null_as_default")]
    pub access_management: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub system: bool,
}

// ============ API Envelopes ============

/// `{ "data": [...] }` list response
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ListResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<T>,
}

/// `{ "metadata": {...}, "data": {...} }` create/update response
#[derive(Debug, Deserialize)]
pub(crate) struct MutationResponse<T> {
    #[serde(default)]
    pub metadata: Metadata,
    pub data: T,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Metadata {
    #[serde(default)]
    pub changed: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
