//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Marketcart - persistent shopping cart
///
/// Keeps a cart of products in a local key-value store. Re-adding a
/// product raises its quantity; items dropping to zero are removed.
#[derive(Parser, Debug)]
#[command(name = "marketcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MARKETCART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Storage file path (overrides storage.path)
    #[arg(short, long, global = true, env = "MARKETCART_STORE")]
    pub store: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the cart
    Add(AddArgs),

    /// Increase the quantity of a cart item
    Increment(ItemArgs),

    /// Decrease the quantity of a cart item, removing it at zero
    Decrement(ItemArgs),

    /// Show the cart
    List(ListArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product ID
    #[arg(long)]
    pub id: String,

    /// Product title
    #[arg(long)]
    pub title: String,

    /// Product image URL
    #[arg(long, default_value = "")]
    pub image_url: String,

    /// Unit price
    #[arg(long)]
    pub price: Decimal,

    /// Output format for the resulting cart
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for commands addressing one cart item
#[derive(Parser, Debug)]
pub struct ItemArgs {
    /// Product ID
    pub id: String,

    /// Output format for the resulting cart
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for cart listings
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array in the persisted format
    Json,
    /// One `id quantity` pair per line
    Plain,
}
