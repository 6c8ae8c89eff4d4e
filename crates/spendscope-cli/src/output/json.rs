use std::io;

use serde::Serialize;
use serde_json::{Value, json};
use spendscope_client::contracts::envelope::failure_from_error;
use spendscope_client::{ClientError, SuccessEnvelope};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "subscriptions" | "merchants" => render_report_json(&success.data),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    serialize_json_pretty(&failure_from_error(error))
}

fn render_report_json(data: &Value) -> Value {
    json!({
        "ok": true,
        "version": JSON_VERSION,
        "data": data.clone()
    })
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use spendscope_client::{ClientError, SuccessEnvelope};

    use super::{render_error_json, render_success_json};

    fn success(command: &str, data: Value) -> SuccessEnvelope {
        SuccessEnvelope {
            ok: true,
            command: command.to_string(),
            version: "0.1.0".to_string(),
            data,
        }
    }

    #[test]
    fn report_json_uses_versioned_envelope() {
        let payload = success(
            "merchants",
            json!({
                "policy_version": "analysis/v1",
                "transactions_analyzed": 0,
                "min_transactions": 3,
                "rows": []
            }),
        );

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(value["data"]["min_transactions"], json!(3));
                assert!(value.get("command").is_none());
            }
        }
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(render_success_json(&success("recurring", json!({}))).is_err());
    }

    #[test]
    fn error_json_carries_code_and_data() {
        let error = ClientError::invalid_input_format("bad shape", "ndjson");
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(false));
                assert_eq!(
                    value["error"]["code"],
                    Value::String("invalid_input_format".to_string())
                );
                assert_eq!(value["data"]["received_format"], json!("ndjson"));
            }
        }
    }
}
