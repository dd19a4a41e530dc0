//! Output functions for consistent CLI formatting

use super::context::UiContext;
use crate::cart::Cart;
use console::style;
use rust_decimal::Decimal;

/// Display a success step
pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("✓").green(), message);
    } else {
        println!("  {} {}", style("[OK]").green(), message);
    }
}

/// Display an info step
pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("●").cyan(), message);
    } else {
        println!("  {} {}", style("[INFO]").cyan(), message);
    }
}

/// Display a warning step with hint
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    if ctx.use_fancy_output() {
        println!("{} {} - {}", style("!").yellow(), message, style(hint).dim());
    } else {
        println!("  {} {} - {}", style("[WARN]").yellow(), message, hint);
    }
}

/// Print styled key-value pair
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    if ctx.use_fancy_output() {
        println!("  {}: {}", style(key).dim(), value);
    } else {
        println!("  {}: {}", key, value);
    }
}

/// Render the cart as an aligned table, one row per line item
pub fn cart_table(cart: &Cart) -> String {
    let mut out = format!(
        "{:<16} {:<24} {:>10} {:>5} {:>12}\n",
        "ID", "TITLE", "PRICE", "QTY", "TOTAL"
    );
    out.push_str(&"-".repeat(71));
    out.push('\n');

    for item in cart {
        out.push_str(&format!(
            "{:<16} {:<24} {:>10.2} {:>5} {:>12}\n",
            item.id,
            item.title,
            item.price,
            item.quantity,
            money(item.line_total())
        ));
    }

    out
}

/// One-line summary of item count and subtotal
pub fn cart_summary(cart: &Cart) -> String {
    format!(
        "{} item(s), {} unit(s), subtotal {}",
        cart.len(),
        cart.item_count(),
        money(cart.subtotal())
    )
}

fn money(amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => format!("{:.2}", amount),
        None => "overflow".to_string(),
    }
}
