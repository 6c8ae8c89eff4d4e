use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use serde_json::{Value, json};
use spendscope_client::SuccessEnvelope;
use spendscope_client::commands::merchants::{self, MerchantsRunOptions};
use spendscope_client::commands::subscriptions::{self, SubscriptionsRunOptions};
use tempfile::{Builder, TempDir};

pub fn temp_fixture_dir(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir()
}

pub fn write_fixture_json(dir: &Path, name: &str, rows: &[Value]) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let body = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
    fs::write(&path, body)?;
    Ok(path)
}

/// `created` timestamp `offset` days after 2026-01-01 09:30 UTC.
pub fn created_at(offset: i64) -> String {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap_or_default();
    (base + Duration::days(offset))
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

pub fn transaction(merchant: Option<&str>, amount: i64, offset: i64) -> Value {
    let mut row = json!({
        "id": format!("tx_{offset}_{amount}"),
        "amount": amount,
        "currency": "GBP",
        "created": created_at(offset),
        "category": "general",
    });
    if let Some(name) = merchant {
        row["merchant"] = json!({ "name": name });
        row["description"] = json!(name.to_uppercase());
    }
    row
}

/// Day offsets separated by `gaps`, starting at day 0.
pub fn offsets_from_gaps(gaps: &[i64]) -> Vec<i64> {
    let mut offsets = vec![0];
    for gap in gaps {
        let last = offsets.last().copied().unwrap_or_default();
        offsets.push(last + gap);
    }
    offsets
}

pub fn subscriptions_from_stdin(rows: &[Value]) -> Value {
    let result = subscriptions::run_with_options(SubscriptionsRunOptions {
        path: None,
        stdin_override: Some(Value::Array(rows.to_vec()).to_string()),
    });
    envelope_to_value(result)
}

pub fn merchants_from_stdin(rows: &[Value], min_transactions: Option<usize>) -> Value {
    let result = merchants::run_with_options(MerchantsRunOptions {
        path: None,
        min_transactions,
        stdin_override: Some(Value::Array(rows.to_vec()).to_string()),
    });
    envelope_to_value(result)
}

pub fn rows_of(payload: &Value) -> Vec<Value> {
    payload["data"]["rows"]
        .as_array()
        .cloned()
        .unwrap_or_default()
}

fn envelope_to_value(result: spendscope_client::ClientResult<SuccessEnvelope>) -> Value {
    assert!(result.is_ok());
    if let Ok(success) = result {
        let payload = serde_json::to_value(success);
        assert!(payload.is_ok());
        if let Ok(value) = payload {
            return value;
        }
    }
    Value::Null
}
