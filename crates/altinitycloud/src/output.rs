use altinitycloud_provider::{
    Diagnostics, NodeTypeModel, NodeTypeResourceModel, Severity, UserModel,
};
use colored::Colorize;
use serde::Serialize;

pub fn print_diagnostics(diags: &Diagnostics) {
    for d in diags.iter() {
        let label = match d.severity {
            Severity::Error => "error:".red().bold(),
            Severity::Warning => "warning:".yellow().bold(),
        };
        match &d.attribute {
            Some(attr) => eprintln!("{} {} ({})", label, d.summary.bold(), attr.cyan()),
            None => eprintln!("{} {}", label, d.summary.bold()),
        }
        eprintln!("  {}", d.detail);
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_node_types(node_types: &[NodeTypeModel]) {
    if node_types.is_empty() {
        println!("{}", "No node types".dimmed());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<8} {:<24} {:<12} {:<20} {:<16} {:<8} {:<8}",
            "ID", "NAME", "SCOPE", "CODE", "STORAGE CLASS", "CPU", "MEMORY"
        )
        .bold()
    );
    println!("{}", "─".repeat(100).dimmed());

    for nt in node_types {
        println!(
            "{:<8} {:<24} {:<12} {:<20} {:<16} {:<8} {:<8}",
            nt.id,
            nt.name.cyan(),
            nt.scope,
            nt.code,
            nt.storage_class,
            nt.cpu,
            nt.memory
        );
    }
}

pub fn print_node_type(nt: &NodeTypeResourceModel) {
    println!("{} {}", "Node type".bold(), nt.name.cyan().bold());
    println!("  {:<14} {}", "id", nt.id);
    println!("  {:<14} {}", "environment", nt.env_id);
    println!("  {:<14} {}", "scope", nt.scope);
    println!("  {:<14} {}", "code", nt.code);
    println!("  {:<14} {}", "pool", nt.pool);
    println!("  {:<14} {}", "storage class", nt.storage_class);
    println!("  {:<14} {} (alloc {})", "cpu", nt.cpu, nt.cpu_alloc);
    println!("  {:<14} {} (alloc {})", "memory", nt.memory, nt.memory_alloc);
    if !nt.node_selector.is_empty() {
        println!("  {:<14} {}", "node selector", nt.node_selector);
    }
    for t in &nt.tolerations {
        println!(
            "  {:<14} {} {} {} : {}",
            "toleration", t.key, t.operator, t.value, t.effect
        );
    }
}

pub fn print_users(users: &[UserModel]) {
    if users.is_empty() {
        println!("{}", "No users".dimmed());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<8} {:<20} {:<10} {:<10} {:<8} {:<8} {:<30}",
            "ID", "LOGIN", "PROFILE", "QUOTA", "ADMIN", "SYSTEM", "NETWORKS"
        )
        .bold()
    );
    println!("{}", "─".repeat(100).dimmed());

    for user in users {
        let admin = if user.access_management {
            "yes".green()
        } else {
            "no".dimmed()
        };
        let system = if user.system {
            "yes".yellow()
        } else {
            "no".dimmed()
        };
        println!(
            "{:<8} {:<20} {:<10} {:<10} {:<8} {:<8} {:<30}",
            user.id,
            user.login.cyan(),
            user.profile_id,
            user.quota_id,
            admin,
            system,
            user.networks.replace('\n', ", ")
        );
    }
}
