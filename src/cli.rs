//! Command-line interface definitions.

use clap::{Parser, Subcommand};

use crate::logging::LoggingConfig;

/// Shipshape - post-deployment reconciliation for ECS services.
#[derive(Parser, Debug)]
#[command(name = "shipshape")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,
}

impl Cli {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: if self.json_logs { "json" } else { "pretty" }.into(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Block until the current deployment's service is stable and healthy
    Wait(WaitArgs),

    /// Delete services and target groups left over from previous deployments
    Prune(PruneArgs),
}

/// Arguments for the `wait` subcommand.
#[derive(Parser, Debug)]
pub struct WaitArgs {
    /// Application name
    #[arg(long)]
    pub app: String,

    /// Waypoint project the application belongs to
    #[arg(long)]
    pub project: String,

    /// ECS cluster (resolved from deployment status when omitted)
    #[arg(long)]
    pub cluster: Option<String>,

    /// Maximum poll attempts per stabilization phase
    #[arg(long, default_value = "40")]
    pub attempts: u32,

    /// Fixed delay between poll attempts, in seconds
    #[arg(long, default_value = "15")]
    pub delay_secs: u64,
}

/// Arguments for the `prune` subcommand.
#[derive(Parser, Debug)]
pub struct PruneArgs {
    /// Application name
    #[arg(long)]
    pub app: String,

    /// Waypoint project the application belongs to
    #[arg(long)]
    pub project: String,

    /// Environment label to match stale deployments against
    #[arg(long)]
    pub environment: String,
}
