//! Add command - put a product in the cart

use crate::cart::ProductInfo;
use crate::cli::args::{AddArgs, OutputFormat};
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};

/// Execute the add command
pub async fn execute(args: AddArgs, config: &Config) -> CartResult<()> {
    let store = super::open_cart(config).await?;

    let product = ProductInfo::new(args.id, args.title, args.image_url, args.price);
    let id = product.id.clone();
    let cart = store.add_to_cart(product).await?;

    if matches!(args.format, OutputFormat::Table) {
        let quantity = cart.get(&id).map(|item| item.quantity).unwrap_or_default();
        ui::step_ok(
            &UiContext::detect(),
            &format!("Added {} (quantity {})", id, quantity),
        );
    }

    super::print_cart(&cart, args.format)
}
