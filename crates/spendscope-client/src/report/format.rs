use crate::analysis::policy::{PRIMARY_CURRENCY, PRIMARY_CURRENCY_SYMBOL};

/// Renders minor units as a two-decimal amount.
///
/// The primary currency gets its symbol as a prefix (`£12.34`, `£-15.00`);
/// any other code is appended (`10.00 USD`).
pub fn format_money(amount: i64, currency: &str) -> String {
    let major = amount as f64 / 100.0;
    if currency == PRIMARY_CURRENCY {
        return format!("{PRIMARY_CURRENCY_SYMBOL}{major:.2}");
    }
    format!("{major:.2} {currency}")
}

pub fn format_primary_money(amount: i64) -> String {
    format_money(amount, PRIMARY_CURRENCY)
}
