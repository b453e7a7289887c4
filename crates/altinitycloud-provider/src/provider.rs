//! Altinity.Cloud provider

use crate::config::ProviderConfig;
use crate::data_source::{DataSource, NodeTypeDataSource, UsersDataSource};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{ProviderError, Result};
use crate::resource::{NodeTypeResource, Resource};
use altinitycloud_client::AltinityCloudClient;
use std::sync::Arc;

/// Provider type name; data source and resource names are prefixed with it
pub const TYPE_NAME: &str = "altinitycloud";

fn new_data_sources() -> Vec<Box<dyn DataSource>> {
    vec![
        Box::new(NodeTypeDataSource::new()),
        Box::new(UsersDataSource::new()),
    ]
}

fn new_resources() -> Vec<Box<dyn Resource>> {
    vec![Box::new(NodeTypeResource::new())]
}

/// Altinity.Cloud provider
pub struct AltinityCloudProvider {
    /// "dev" for local builds, "test" under tests, the release version otherwise
    version: String,
    client: Option<Arc<AltinityCloudClient>>,
}

impl AltinityCloudProvider {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            client: None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The shared API client, once configured
    pub fn client(&self) -> Option<&Arc<AltinityCloudClient>> {
        self.client.as_ref()
    }

    /// Resolve configuration and build the API client
    pub fn configure(&mut self, config: &ProviderConfig) -> std::result::Result<(), Diagnostics> {
        tracing::info!("Configuring Altinity.Cloud client");

        let resolved = config.resolve()?;

        tracing::debug!(api_endpoint = %resolved.api_endpoint, "Creating Altinity.Cloud client");

        let client = AltinityCloudClient::new(
            Some(resolved.api_endpoint),
            Some(resolved.api_token),
        )
        .map_err(|e| {
            Diagnostics::from(Diagnostic::error(
                "Unable to Create Altinity.Cloud API Client",
                format!(
                    "An unexpected error occurred when creating the Altinity.Cloud API client. \
                     If the error is not clear, please contact the provider developers.\n\n\
                     Altinity.Cloud Client Error: {}",
                    e
                ),
            ))
        })?;

        self.client = Some(Arc::new(client));
        Ok(())
    }

    /// All data sources, configured with the client if available
    pub fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        new_data_sources()
            .into_iter()
            .map(|mut ds| {
                if let Some(client) = &self.client {
                    ds.configure(Arc::clone(client));
                }
                ds
            })
            .collect()
    }

    /// All resources, configured with the client if available
    pub fn resources(&self) -> Vec<Box<dyn Resource>> {
        new_resources()
            .into_iter()
            .map(|mut r| {
                if let Some(client) = &self.client {
                    r.configure(Arc::clone(client));
                }
                r
            })
            .collect()
    }

    /// Look up a data source by full type name (e.g. "altinitycloud_users")
    pub fn data_source(&self, type_name: &str) -> Result<Box<dyn DataSource>> {
        self.data_sources()
            .into_iter()
            .find(|ds| self.full_name(ds.type_name_suffix()) == type_name)
            .ok_or_else(|| ProviderError::UnknownType(type_name.to_string()))
    }

    /// Look up a resource by full type name (e.g. "altinitycloud_node_type")
    pub fn resource(&self, type_name: &str) -> Result<Box<dyn Resource>> {
        self.resources()
            .into_iter()
            .find(|r| self.full_name(r.type_name_suffix()) == type_name)
            .ok_or_else(|| ProviderError::UnknownType(type_name.to_string()))
    }

    /// Full type names of the registered data sources
    pub fn data_source_names(&self) -> Vec<String> {
        self.data_sources()
            .iter()
            .map(|ds| self.full_name(ds.type_name_suffix()))
            .collect()
    }

    /// Full type names of the registered resources
    pub fn resource_names(&self) -> Vec<String> {
        self.resources()
            .iter()
            .map(|r| self.full_name(r.type_name_suffix()))
            .collect()
    }

    fn full_name(&self, suffix: &str) -> String {
        format!("{}{}", TYPE_NAME, suffix)
    }
}
