use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use dockhand_cluster::{ClusterApi, DocdbCluster};
use dockhand_core::LifecycleConfig;

mod commands;

const DEFAULT_CONFIG_PATH: &str = "dockhand.toml";

#[derive(Parser)]
#[command(
    name = "dockhand",
    about = "dockhand — temporary-instance lifecycle for managed DB clusters",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to dockhand.toml (default: ./dockhand.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Cluster identifier (overrides config)
    #[arg(long)]
    cluster: Option<String>,
    /// AWS region (overrides config and environment)
    #[arg(long)]
    region: Option<String>,
    /// Temporary-instance name prefix (overrides config)
    #[arg(long)]
    prefix: Option<String>,
    /// Maximum member count a creation may reach (overrides config)
    #[arg(long)]
    ceiling: Option<u32>,
    /// Instance class for new instances (overrides config)
    #[arg(long)]
    instance_class: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cluster membership and temporary-instance metadata
    Status {
        /// Output format
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Create temporary instances, one at a time, under the ceiling
    ScaleUp {
        /// Number of instances to add
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
    /// Delete ready temporary instances, one at a time
    ScaleDown {
        /// Number of instances to delete
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
}

/// Resolve the run config from file + flag overrides.
///
/// A `--cluster` flag alone is enough to run without a config file.
fn load_config(cli: &Cli) -> anyhow::Result<LifecycleConfig> {
    let mut config = if let Some(path) = &cli.config {
        LifecycleConfig::from_file(path)?
    } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
        LifecycleConfig::from_file(Path::new(DEFAULT_CONFIG_PATH))?
    } else if let Some(cluster) = &cli.cluster {
        LifecycleConfig::new(cluster)
    } else {
        anyhow::bail!(
            "no configuration: pass --config <dockhand.toml> or --cluster <id>"
        );
    };

    if let Some(cluster) = &cli.cluster {
        config.cluster_id = cluster.clone();
    }
    if let Some(region) = &cli.region {
        config.region = Some(region.clone());
    }
    if let Some(prefix) = &cli.prefix {
        config.name_prefix = prefix.clone();
    }
    if let Some(ceiling) = cli.ceiling {
        config.ceiling = ceiling;
    }
    if let Some(class) = &cli.instance_class {
        config.instance_class = class.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dockhand=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let api: Arc<dyn ClusterApi> =
        Arc::new(DocdbCluster::connect(config.region.as_deref()).await);

    match cli.command {
        Commands::Status { format } => commands::status::run(api, &config, &format).await,
        Commands::ScaleUp { count } => commands::scale::up(api, config, count).await,
        Commands::ScaleDown { count } => commands::scale::down(api, config, count).await,
    }
}
