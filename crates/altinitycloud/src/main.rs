mod commands;
mod output;

use altinitycloud_provider::{AltinityCloudProvider, ProviderConfig, TolerationModel};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "altinitycloud")]
#[command(about = "Manage Altinity.Cloud node types and inspect cluster users", long_about = None)]
struct Cli {
    /// Altinity.Cloud API endpoint (falls back to ALTINITY_CLOUD_ENDPOINT, then the default)
    #[arg(long, global = true)]
    api_endpoint: Option<String>,

    /// Altinity.Cloud API token (falls back to ALTINITY_CLOUD_TOKEN)
    #[arg(long, global = true)]
    api_token: Option<String>,

    /// Print state as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Node type management
    #[command(subcommand)]
    NodeTypes(NodeTypeCommands),
    /// Cluster users
    #[command(subcommand)]
    Users(UserCommands),
    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum NodeTypeCommands {
    /// List node types of an environment
    List {
        /// Environment ID
        #[arg(long)]
        env_id: String,
    },
    /// Show a node type by name
    Get {
        /// Environment ID
        #[arg(long)]
        env_id: String,
        /// Node type name
        #[arg(long)]
        name: String,
    },
    /// Create a node type
    Create(NodeTypeArgs),
    /// Update a node type (looked up by name)
    Update(NodeTypeArgs),
    /// Delete a node type by ID
    Delete {
        /// Node type ID
        #[arg(long)]
        id: String,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List users of a cluster
    List {
        /// Cluster ID
        #[arg(long)]
        cluster_id: String,
    },
}

#[derive(Args)]
pub(crate) struct NodeTypeArgs {
    /// Environment ID
    #[arg(long)]
    pub env_id: String,
    /// Node type name
    #[arg(long)]
    pub name: String,
    /// Scope (e.g. ClickHouse, Zookeeper, System)
    #[arg(long)]
    pub scope: String,
    /// Instance type code
    #[arg(long)]
    pub code: String,
    /// Kubernetes storage class
    #[arg(long)]
    pub storage_class: String,
    /// CPU request
    #[arg(long)]
    pub cpu: String,
    /// Memory request
    #[arg(long)]
    pub memory: String,
    /// Node pool
    #[arg(long, default_value = "")]
    pub pool: String,
    /// Node selector
    #[arg(long, default_value = "")]
    pub node_selector: String,
    /// Toleration as key=K,operator=O,value=V,effect=E (repeatable)
    #[arg(long = "toleration", value_parser = commands::node_types::parse_toleration)]
    pub tolerations: Vec<TolerationModel>,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout carries the state output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn configure(provider: &mut AltinityCloudProvider, cli: &Cli) -> anyhow::Result<()> {
    let config = ProviderConfig::new(cli.api_endpoint.clone(), cli.api_token.clone());

    if let Err(diags) = provider.configure(&config) {
        output::print_diagnostics(&diags);
        anyhow::bail!("provider configuration failed");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut provider = AltinityCloudProvider::new(env!("CARGO_PKG_VERSION"));

    // version needs no credentials
    if matches!(cli.command, Commands::Version) {
        println!("{} {}", provider.type_name(), provider.version());
        return Ok(());
    }

    configure(&mut provider, &cli)?;

    let result = match &cli.command {
        Commands::NodeTypes(cmd) => match cmd {
            NodeTypeCommands::List { env_id } => {
                commands::node_types::handle_list(&provider, env_id, cli.json).await
            }
            NodeTypeCommands::Get { env_id, name } => {
                commands::node_types::handle_get(&provider, env_id, name, cli.json).await
            }
            NodeTypeCommands::Create(args) => {
                commands::node_types::handle_create(&provider, args, cli.json).await
            }
            NodeTypeCommands::Update(args) => {
                commands::node_types::handle_update(&provider, args, cli.json).await
            }
            NodeTypeCommands::Delete { id } => {
                commands::node_types::handle_delete(&provider, id).await
            }
        },
        Commands::Users(cmd) => match cmd {
            UserCommands::List { cluster_id } => {
                commands::users::handle_list(&provider, cluster_id, cli.json).await
            }
        },
        Commands::Version => Ok(()),
    };

    if let Err(e) = &result {
        if let Some(provider_err) = e.downcast_ref::<altinitycloud_provider::ProviderError>() {
            output::print_diagnostics(&provider_err.to_diagnostic().into());
        } else {
            eprintln!("{} {}", "error:".red().bold(), e);
        }
        std::process::exit(1);
    }

    Ok(())
}
