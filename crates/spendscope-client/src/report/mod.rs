//! Plain-text reports over already-sorted analysis results.

mod format;
mod merchants_text;
mod subscriptions_text;

pub use format::{format_money, format_primary_money};
pub use merchants_text::{NO_FREQUENT_MERCHANTS_MESSAGE, render_frequent_merchants};
pub use subscriptions_text::{NO_SUBSCRIPTIONS_MESSAGE, render_subscriptions};

/// Shown instead of either report when the batch itself was empty.
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found to analyze.";
