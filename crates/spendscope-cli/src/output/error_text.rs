use serde_json::Value;
use spendscope_client::ClientError;

/// Error `data` keys worth showing in text mode, with their labels.
const DATA_HINTS: [(&str, &str); 5] = [
    ("received_format", "Received"),
    ("supported_formats", "Accepted"),
    ("required_headers", "Required"),
    ("optional_headers", "Optional"),
    ("actual_headers", "Found"),
];

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Could not analyze those transactions.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];
    if let Some(data) = &error.data {
        lines.extend(data_hint_lines(data));
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    }
    lines.extend(
        error
            .recovery_steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("  {}. {step}", index + 1)),
    );

    lines.join("\n")
}

fn data_hint_lines(data: &Value) -> Vec<String> {
    DATA_HINTS
        .iter()
        .filter_map(|(key, label)| {
            let rendered = hint_value(data.get(*key)?)?;
            Some(format!("  {:<10}{rendered}", format!("{label}:")))
        })
        .collect()
}

// Empty header lists render as `(none)` so a headerless CSV still says so.
fn hint_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) if items.is_empty() => Some("(none)".to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<String>>()
                .join(", "),
        ),
        _ => None,
    }
}
