//! List command - show the cart

use crate::cli::args::ListArgs;
use crate::config::Config;
use crate::error::CartResult;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> CartResult<()> {
    let store = super::open_cart(config).await?;
    super::print_cart(&store.products(), args.format)
}
