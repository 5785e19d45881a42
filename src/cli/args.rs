use clap::{Parser, Subcommand};

use inventory_admin::config::{ENV_API_URL, ENV_PAGE_SIZE, ENV_TIMEOUT_SECS};
use inventory_admin::model::StockFilter;

#[derive(Parser, Debug)]
#[command(name = "inventory", version)]
#[command(about = "Manage the products of an inventory service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the inventory service
    #[arg(long, global = true, env = ENV_API_URL)]
    pub api_url: Option<String>,

    /// Seconds to wait for each request
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS)]
    pub timeout_secs: Option<u64>,

    /// Use a seeded in-memory store instead of the service
    #[arg(long, global = true)]
    pub memory: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products with search, filters and pagination
    #[command(alias = "ls")]
    List {
        /// Case-insensitive match on name or category
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,

        /// in-stock, low-stock or out-of-stock
        #[arg(long)]
        stock: Option<StockFilter>,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// 5, 10, 25, 50 or 100
        #[arg(long, env = ENV_PAGE_SIZE)]
        page_size: Option<usize>,
    },

    /// Show one product
    Show { id: String },

    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        #[arg(long)]
        category: String,
        #[arg(long, allow_hyphen_values = true)]
        stock: String,
    },

    /// Edit a product; omitted fields keep their current values
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        stock: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the categories present in the inventory
    Categories,
}
