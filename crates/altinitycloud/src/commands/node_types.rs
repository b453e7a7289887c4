//! node-types command handlers

use crate::NodeTypeArgs;
use crate::output;
use altinitycloud_provider::{
    AltinityCloudProvider, NodeTypeDataSourceModel, NodeTypeResourceModel, TolerationModel,
};
use colored::Colorize;

const NODE_TYPE: &str = "altinitycloud_node_type";

/// Parse `key=K,operator=O,value=V,effect=E`
pub fn parse_toleration(s: &str) -> Result<TolerationModel, String> {
    let mut toleration = TolerationModel::default();

    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (k, v) = part
            .split_once('=')
            .ok_or_else(|| format!("expected field=value, got '{}'", part))?;
        match k.trim() {
            "key" => toleration.key = v.trim().to_string(),
            "operator" => toleration.operator = v.trim().to_string(),
            "value" => toleration.value = v.trim().to_string(),
            "effect" => toleration.effect = v.trim().to_string(),
            other => return Err(format!("unknown toleration field '{}'", other)),
        }
    }

    if toleration.key.is_empty() && toleration.operator != "Exists" {
        return Err("toleration needs a key unless operator=Exists".to_string());
    }

    Ok(toleration)
}

fn plan(args: &NodeTypeArgs) -> NodeTypeResourceModel {
    NodeTypeResourceModel {
        env_id: args.env_id.clone(),
        name: args.name.clone(),
        scope: args.scope.clone(),
        code: args.code.clone(),
        storage_class: args.storage_class.clone(),
        cpu: args.cpu.clone(),
        memory: args.memory.clone(),
        pool: args.pool.clone(),
        node_selector: args.node_selector.clone(),
        tolerations: args.tolerations.clone(),
        ..Default::default()
    }
}

fn print_state(state: &NodeTypeResourceModel, json: bool) -> anyhow::Result<()> {
    if json {
        output::print_json(state)
    } else {
        output::print_node_type(state);
        Ok(())
    }
}

pub async fn handle_list(
    provider: &AltinityCloudProvider,
    env_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    tracing::debug!(env_id, "listing node types");
    let ds = provider.data_source(NODE_TYPE)?;

    let config = NodeTypeDataSourceModel {
        env_id: env_id.to_string(),
        ..Default::default()
    };
    let state: NodeTypeDataSourceModel =
        serde_json::from_value(ds.read(serde_json::to_value(config)?).await?)?;

    if json {
        output::print_json(&state)
    } else {
        output::print_node_types(&state.data);
        Ok(())
    }
}

pub async fn handle_get(
    provider: &AltinityCloudProvider,
    env_id: &str,
    name: &str,
    json: bool,
) -> anyhow::Result<()> {
    let resource = provider.resource(NODE_TYPE)?;

    let lookup = NodeTypeResourceModel {
        env_id: env_id.to_string(),
        name: name.to_string(),
        ..Default::default()
    };

    match resource.read(serde_json::to_value(lookup)?).await? {
        Some(state) => print_state(&serde_json::from_value(state)?, json),
        None => anyhow::bail!("node type '{}' not found in environment {}", name, env_id),
    }
}

pub async fn handle_create(
    provider: &AltinityCloudProvider,
    args: &NodeTypeArgs,
    json: bool,
) -> anyhow::Result<()> {
    let resource = provider.resource(NODE_TYPE)?;

    tracing::debug!(env_id = %args.env_id, name = %args.name, "creating node type");
    let state = resource.create(serde_json::to_value(plan(args))?).await?;
    let state: NodeTypeResourceModel = serde_json::from_value(state)?;

    if !json {
        eprintln!("{}", format!("✓ Created node type {}", state.name).green());
    }
    print_state(&state, json)
}

pub async fn handle_update(
    provider: &AltinityCloudProvider,
    args: &NodeTypeArgs,
    json: bool,
) -> anyhow::Result<()> {
    let resource = provider.resource(NODE_TYPE)?;

    tracing::debug!(env_id = %args.env_id, name = %args.name, "updating node type");
    let state = resource.update(serde_json::to_value(plan(args))?).await?;
    let state: NodeTypeResourceModel = serde_json::from_value(state)?;

    if !json {
        eprintln!("{}", format!("✓ Updated node type {}", state.name).green());
    }
    print_state(&state, json)
}

pub async fn handle_delete(provider: &AltinityCloudProvider, id: &str) -> anyhow::Result<()> {
    let resource = provider.resource(NODE_TYPE)?;

    let state = NodeTypeResourceModel {
        id: id.to_string(),
        ..Default::default()
    };
    resource.delete(serde_json::to_value(state)?).await?;

    eprintln!("{}", format!("✓ Deleted node type {}", id).green());
    Ok(())
}
