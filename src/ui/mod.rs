//! UI module for consistent CLI output
//!
//! Styled output through `console`, with plain bracketed prefixes when
//! stdout is not a terminal (pipes, CI).

mod context;
mod output;

pub use context::UiContext;
pub use output::{cart_summary, cart_table, key_value, step_info, step_ok, step_warn_hint};
