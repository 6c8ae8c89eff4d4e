use std::io;

use serde::de::DeserializeOwned;
use serde_json::Value;
use spendscope_client::contracts::types::{MerchantsData, SubscriptionsData};
use spendscope_client::report::{
    NO_TRANSACTIONS_MESSAGE, render_frequent_merchants, render_subscriptions,
};

pub fn render_subscriptions_report(data: &Value) -> io::Result<String> {
    let parsed = decode::<SubscriptionsData>(data)?;
    if parsed.transactions_analyzed == 0 {
        return Ok(NO_TRANSACTIONS_MESSAGE.to_string());
    }
    Ok(render_subscriptions(&parsed.rows))
}

pub fn render_merchants_report(data: &Value) -> io::Result<String> {
    let parsed = decode::<MerchantsData>(data)?;
    if parsed.transactions_analyzed == 0 {
        return Ok(NO_TRANSACTIONS_MESSAGE.to_string());
    }
    Ok(render_frequent_merchants(&parsed.rows))
}

fn decode<T>(data: &Value) -> io::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(data.clone()).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_merchants_report, render_subscriptions_report};

    #[test]
    fn empty_batch_reports_no_transactions() {
        let data = json!({
            "policy_version": "analysis/v1",
            "transactions_analyzed": 0,
            "rows": []
        });
        let rendered = render_subscriptions_report(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert_eq!(text, "No transactions found to analyze.");
        }
    }

    #[test]
    fn analysed_batch_without_rows_uses_tip_message() {
        let data = json!({
            "policy_version": "analysis/v1",
            "transactions_analyzed": 4,
            "min_transactions": 3,
            "rows": []
        });
        let rendered = render_merchants_report(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("No frequent merchants found."));
        }
    }

    #[test]
    fn subscription_rows_round_trip_into_report() {
        let data = json!({
            "policy_version": "analysis/v1",
            "transactions_analyzed": 3,
            "rows": [{
                "merchant": "Netflix",
                "amount": 999,
                "currency": "GBP",
                "frequency": "monthly",
                "last_date": "2026-03-02T08:00:00",
                "next_date": "2026-04-01T08:00:00",
                "transaction_count": 3
            }]
        });
        let rendered = render_subscriptions_report(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("  - Netflix: £9.99/month (next: ~Apr 01)"));
            assert!(text.ends_with("Estimated monthly total: £9.99"));
        }
    }

    #[test]
    fn malformed_rows_are_an_io_error() {
        let data = json!({"transactions_analyzed": "many"});
        assert!(render_merchants_report(&data).is_err());
    }
}
