//! Increment and decrement commands - adjust a cart item's quantity

use crate::cli::args::{ItemArgs, OutputFormat};
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};

/// Execute the increment command
pub async fn increment(args: ItemArgs, config: &Config) -> CartResult<()> {
    let store = super::open_cart(config).await?;
    let known = store.products().get(&args.id).is_some();

    let cart = store.increment(&args.id).await?;

    if matches!(args.format, OutputFormat::Table) {
        let ctx = UiContext::detect();
        match cart.get(&args.id) {
            Some(item) if known => {
                ui::step_ok(&ctx, &format!("{} quantity {}", args.id, item.quantity))
            }
            _ => ui::step_warn_hint(
                &ctx,
                &format!("{} is not in the cart", args.id),
                "Use `marketcart add` to add it",
            ),
        }
    }

    super::print_cart(&cart, args.format)
}

/// Execute the decrement command
pub async fn decrement(args: ItemArgs, config: &Config) -> CartResult<()> {
    let store = super::open_cart(config).await?;
    let known = store.products().get(&args.id).is_some();

    let cart = store.decrement(&args.id).await?;

    if matches!(args.format, OutputFormat::Table) {
        let ctx = UiContext::detect();
        match cart.get(&args.id) {
            Some(item) => ui::step_ok(&ctx, &format!("{} quantity {}", args.id, item.quantity)),
            None if known => ui::step_ok(&ctx, &format!("Removed {}", args.id)),
            None => ui::step_warn_hint(
                &ctx,
                &format!("{} is not in the cart", args.id),
                "Nothing to decrement",
            ),
        }
    }

    super::print_cart(&cart, args.format)
}
