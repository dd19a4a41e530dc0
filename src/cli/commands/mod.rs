//! CLI command implementations

pub mod add;
pub mod config;
pub mod list;
pub mod quantity;

pub use add::execute as add;
pub use config::execute as config;
pub use list::execute as list;
pub use quantity::{decrement, increment};

use crate::cart::Cart;
use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::CartResult;
use crate::provider::CartProvider;
use crate::store::CartStore;
use crate::ui::{self, UiContext};
use std::sync::Arc;

/// Mount a provider for the configured storage and hand out its cart
pub(crate) async fn open_cart(config: &Config) -> CartResult<Arc<CartStore>> {
    let mut provider = CartProvider::from_config(config)?;
    provider.mount().await;
    provider.cart()
}

/// Print a cart in the requested format
pub(crate) fn print_cart(cart: &Cart, format: OutputFormat) -> CartResult<()> {
    match format {
        OutputFormat::Table => {
            if cart.is_empty() {
                ui::step_info(&UiContext::detect(), "Cart is empty");
            } else {
                print!("{}", ui::cart_table(cart));
                println!();
                println!("{}", ui::cart_summary(cart));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(cart)?),
        OutputFormat::Plain => {
            for item in cart {
                println!("{} {}", item.id, item.quantity);
            }
        }
    }
    Ok(())
}
