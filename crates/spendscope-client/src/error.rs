use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const INPUT_HELP_COMMAND: &str = "spendscope subscriptions --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `spendscope {cmd} --help` for usage."),
            None => "Run `spendscope --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_input(message: &str) -> Self {
        Self::new(
            "invalid_input",
            message,
            vec![
                "Provide a JSON array of transactions, a `{\"transactions\": [...]}` object, or CSV with headers.".to_string(),
                format!("Run `{INPUT_HELP_COMMAND}` to review accepted input."),
            ],
        )
    }

    pub fn invalid_input_format(message: &str, received_format: &str) -> Self {
        Self::new(
            "invalid_input_format",
            message,
            vec![
                "Provide a supported input format (JSON array, transactions object, or CSV)."
                    .to_string(),
                format!("Run `{INPUT_HELP_COMMAND}` to confirm field requirements."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "json_transactions_object", "csv"],
        }))
    }

    pub fn input_schema_mismatch(
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        let mut expected_headers = required_headers.clone();
        expected_headers.extend(optional_headers.clone());

        Self::new(
            "input_schema_mismatch",
            "CSV headers do not satisfy the transaction schema.",
            vec![
                "Include all required headers; optional headers may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
                format!("Run `{INPUT_HELP_COMMAND}` to review required and optional fields."),
            ],
        )
        .with_data(json!({
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "expected_headers": expected_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn invalid_argument_for_command_points_at_command_help() {
        let error = ClientError::invalid_argument_for_command("bad", Some("merchants"));
        assert_eq!(error.code, "invalid_argument");
        assert_eq!(
            error.recovery_steps,
            vec!["Run `spendscope merchants --help` for usage.".to_string()]
        );
        assert_eq!(
            error.data.as_ref().and_then(|data| data["command_hint"].as_str()),
            Some("merchants")
        );
    }

    #[test]
    fn schema_mismatch_lists_expected_headers() {
        let error = ClientError::input_schema_mismatch(
            vec!["created".to_string()],
            vec!["id".to_string()],
            vec!["when".to_string()],
        );
        assert_eq!(error.code, "input_schema_mismatch");
        let expected = error
            .data
            .as_ref()
            .and_then(|data| data["expected_headers"].as_array().cloned())
            .unwrap_or_default();
        assert_eq!(expected.len(), 2);
        assert_eq!(error.to_string(), "CSV headers do not satisfy the transaction schema.");
    }
}
