//! CLI command implementations.

pub mod analytics;
pub mod analyze;
pub mod config;
pub mod import;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List catalog products.
    List {
        /// Full-text search in product names.
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by status (draft, active, archived).
        #[arg(long)]
        status: Option<String>,

        /// Filter by category id.
        #[arg(long)]
        category: Option<String>,

        /// Filter by brand id.
        #[arg(long)]
        brand: Option<String>,

        /// Only show in-stock products.
        #[arg(long)]
        in_stock: bool,

        /// Sort order (newest, oldest, price-asc, price-desc, name-asc, name-desc).
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Page to show (1-indexed).
        #[arg(short, long, default_value = "1")]
        page: i64,

        /// Items per page.
        #[arg(long, default_value = "24")]
        per_page: i64,
    },
    /// Show one product in full.
    Show {
        /// Product id.
        id: String,
    },
    /// Archive a product, hiding it from the storefront.
    Archive {
        /// Product id.
        id: String,

        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the product CSV file.
    pub file: String,

    /// Validate only; insert nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Show every row issue instead of the first few.
    #[arg(long)]
    pub all_issues: bool,
}

/// Arguments for the analytics command.
#[derive(Args)]
pub struct AnalyticsArgs {
    /// Only include orders from the last N months.
    #[arg(short, long)]
    pub months: Option<u32>,

    /// How many best-sellers to show.
    #[arg(short, long, default_value = "5")]
    pub top: usize,

    /// Aggregate a single customer instead of the whole shop.
    #[arg(long)]
    pub user: Option<String>,
}

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// URL of the product photo to analyze.
    pub image_url: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
