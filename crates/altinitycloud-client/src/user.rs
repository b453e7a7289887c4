//! Cluster user endpoints

use crate::client::AltinityCloudClient;
use crate::error::Result;
use crate::model::{ListResponse, User};
use reqwest::Method;

impl AltinityCloudClient {
    /// List the users of a cluster
    pub async fn list_users(&self, cluster_id: &str) -> Result<Vec<User>> {
        let builder = self.request(Method::GET, &format!("/cluster/{}/users", cluster_id));

        let response: ListResponse<User> = self.send_json(builder, None).await?;
        Ok(response.data)
    }
}
