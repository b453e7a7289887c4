//! users command handlers

use crate::output;
use altinitycloud_provider::{AltinityCloudProvider, UsersDataSourceModel};

const USERS: &str = "altinitycloud_users";

pub async fn handle_list(
    provider: &AltinityCloudProvider,
    cluster_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    tracing::debug!(cluster_id, "listing users");
    let ds = provider.data_source(USERS)?;

    let config = UsersDataSourceModel {
        cluster_id: cluster_id.to_string(),
        ..Default::default()
    };
    let state: UsersDataSourceModel =
        serde_json::from_value(ds.read(serde_json::to_value(config)?).await?)?;

    if json {
        output::print_json(&state)
    } else {
        output::print_users(&state.users);
        Ok(())
    }
}
