//! Ridge CLI - back-office tool for the Ridgeline storefront.
//!
//! Commands:
//! - `ridge products` - List, inspect, and archive catalog products
//! - `ridge import` - Bulk-import products from a CSV file
//! - `ridge analytics` - Revenue and best-seller dashboards
//! - `ridge analyze` - AI-assisted product data entry from a photo
//! - `ridge config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AnalyticsArgs, AnalyzeArgs, ConfigArgs, ImportArgs, ProductsArgs};

/// Ridge CLI - administer the Ridgeline storefront
#[derive(Parser)]
#[command(name = "ridge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, inspect, and archive catalog products
    Products(ProductsArgs),

    /// Bulk-import products from a CSV file
    Import(ImportArgs),

    /// Revenue and best-seller dashboards
    Analytics(AnalyticsArgs),

    /// Analyze a product photo into a pre-filled draft
    Analyze(AnalyzeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Import(args) => commands::import::run(args, &ctx).await,
        Commands::Analytics(args) => commands::analytics::run(args, &ctx).await,
        Commands::Analyze(args) => commands::analyze::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
