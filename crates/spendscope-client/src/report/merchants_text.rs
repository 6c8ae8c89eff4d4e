use crate::analysis::date::format_short_date;
use crate::analysis::types::FrequentMerchant;
use crate::report::format::{format_money, format_primary_money};

pub const NO_FREQUENT_MERCHANTS_MESSAGE: &str = concat!(
    "No frequent merchants found.\n\n",
    "Tip: Merchants need at least 3 transactions to appear here."
);

pub fn render_frequent_merchants(merchants: &[FrequentMerchant]) -> String {
    if merchants.is_empty() {
        return NO_FREQUENT_MERCHANTS_MESSAGE.to_string();
    }

    let mut lines = vec!["Frequent Merchants:".to_string(), String::new()];
    let mut total_all = 0_i64;

    for merchant in merchants {
        lines.push(format!(
            "{} ({} transactions)",
            merchant.merchant, merchant.transaction_count
        ));
        lines.push(format!(
            "  Total: {} | Avg: {}",
            format_money(merchant.total_spent, &merchant.currency),
            format_money(merchant.average_amount, &merchant.currency)
        ));
        lines.push(format!(
            "  Period: {} - {}",
            format_short_date(&merchant.first_date),
            format_short_date(&merchant.last_date)
        ));
        lines.push(String::new());
        total_all = total_all.saturating_add(merchant.total_spent);
    }

    lines.push(format!(
        "Total across frequent merchants: {}",
        format_primary_money(total_all)
    ));
    lines.join("\n")
}
