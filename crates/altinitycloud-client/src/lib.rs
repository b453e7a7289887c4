//! Altinity.Cloud API client
//!
//! This crate wraps the Altinity.Cloud control plane REST API used to manage
//! ClickHouse environments.
//!
//! # Features
//!
//! - Node type management (list, get by name, create, update, delete)
//! - Cluster user listing (read-only)
//!
//! # Example
//!
//! ```ignore
//! use altinitycloud_client::AltinityCloudClient;
//!
//! let client = AltinityCloudClient::new(None, Some(token))?;
//!
//! // Look up a node type by name
//! match client.get_node_type("652", "m5.large").await? {
//!     Some(nt) => println!("{} -> {}", nt.name, nt.id),
//!     None => println!("not found"),
//! }
//!
//! // Users of a cluster
//! let users = client.list_users("1234").await?;
//! ```

pub mod client;
pub mod error;
pub mod model;
mod node_type;
mod user;

pub use client::{API_ENDPOINT, AUTH_HEADER, AltinityCloudClient, REQUEST_TIMEOUT};
pub use error::{AltinityCloudError, Result};
pub use model::{NodeType, Toleration, User};
