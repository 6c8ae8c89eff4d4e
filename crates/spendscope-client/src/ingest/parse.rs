use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::analysis::normalize::{RawMerchant, RawTransaction};
use crate::{ClientError, ClientResult};

const REQUIRED_CSV_HEADERS: [&str; 2] = ["created", "amount"];
const OPTIONAL_CSV_HEADERS: [&str; 5] = ["id", "currency", "description", "merchant", "category"];

pub(crate) fn parse_source(content: &str) -> ClientResult<Vec<RawTransaction>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_input("Transaction source is empty."));
    }

    if looks_like_ndjson(trimmed) {
        return Err(ClientError::invalid_input_format(
            "NDJSON is not supported. Provide a JSON array, a transactions object, or CSV.",
            "ndjson",
        ));
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return parse_json(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return parse_json(trimmed);
    }

    Err(ClientError::invalid_input_format(
        "Unsupported input format. Provide a JSON array, a transactions object, or CSV with headers.",
        "unknown",
    ))
}

fn parse_json(content: &str) -> ClientResult<Vec<RawTransaction>> {
    let parsed = serde_json::from_str::<Value>(content)
        .map_err(|_| ClientError::invalid_input("Invalid JSON input. Provide valid JSON."))?;

    let items = match &parsed {
        Value::Array(items) => items,
        Value::Object(object) => match object.get("transactions") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ClientError::invalid_input_format(
                    "JSON objects must carry a `transactions` array.",
                    "json_object_without_transactions",
                ));
            }
        },
        _ => {
            return Err(ClientError::invalid_input_format(
                "JSON input must be an array of transactions or a transactions object.",
                "json_scalar",
            ));
        }
    };

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let Some(object) = item.as_object() else {
            return Err(ClientError::invalid_input(
                "Transaction entries must all be JSON objects.",
            ));
        };
        rows.push(raw_from_json_object(object));
    }

    Ok(rows)
}

fn raw_from_json_object(object: &Map<String, Value>) -> RawTransaction {
    RawTransaction {
        id: read_optional_string(object.get("id")),
        amount: read_minor_units(object.get("amount")),
        currency: read_optional_string(object.get("currency")),
        created: read_optional_string(object.get("created")),
        merchant: read_merchant(object.get("merchant")),
        description: read_optional_string(object.get("description")),
        category: read_optional_string(object.get("category")),
    }
}

fn read_merchant(value: Option<&Value>) -> Option<RawMerchant> {
    match value? {
        Value::Object(details) => Some(RawMerchant::Expanded {
            name: read_optional_string(details.get("name")),
        }),
        Value::String(reference) => Some(RawMerchant::Reference(reference.clone())),
        _ => None,
    }
}

fn read_minor_units(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn read_optional_string(value: Option<&Value>) -> Option<String> {
    let current = value?;

    if current.is_null() {
        return None;
    }

    if let Some(string_value) = current.as_str() {
        return Some(string_value.to_string());
    }

    Some(current.to_string())
}

fn parse_csv(content: &str) -> ClientResult<Vec<RawTransaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| ClientError::invalid_input("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(ClientError::input_schema_mismatch(
            to_strings(&REQUIRED_CSV_HEADERS),
            to_strings(&OPTIONAL_CSV_HEADERS),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record = result_row
            .map_err(|_| ClientError::invalid_input("CSV rows are malformed or not UTF-8."))?;

        rows.push(RawTransaction {
            id: value_for(&record, &index_by_name, "id"),
            amount: value_for(&record, &index_by_name, "amount")
                .and_then(|value| value.parse::<i64>().ok()),
            currency: value_for(&record, &index_by_name, "currency"),
            created: value_for(&record, &index_by_name, "created"),
            merchant: value_for(&record, &index_by_name, "merchant")
                .map(|name| RawMerchant::Expanded { name: Some(name) }),
            description: value_for(&record, &index_by_name, "description"),
            category: value_for(&record, &index_by_name, "category"),
        });
    }

    Ok(rows)
}

// Empty CSV cells read as absent; CSV has no null.
fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

fn looks_like_ndjson(content: &str) -> bool {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<&str>>();
    if lines.len() < 2 {
        return false;
    }

    lines.iter().all(|line| {
        let parsed = serde_json::from_str::<Value>(line.trim());
        if let Ok(value) = parsed {
            return value.is_object();
        }
        false
    })
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    let has_required = REQUIRED_CSV_HEADERS
        .iter()
        .all(|required| actual_headers.iter().any(|value| value == required));
    let all_known = actual_headers.iter().all(|header| {
        REQUIRED_CSV_HEADERS.contains(&header.as_str())
            || OPTIONAL_CSV_HEADERS.contains(&header.as_str())
    });
    has_required && all_known
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
