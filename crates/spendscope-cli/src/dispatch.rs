use spendscope_client::commands;
use spendscope_client::commands::merchants::MerchantsRunOptions;
use spendscope_client::commands::subscriptions::SubscriptionsRunOptions;
use spendscope_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    dispatch_with_stdin(cli, None)
}

fn dispatch_with_stdin(cli: &Cli, stdin_override: Option<String>) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Subscriptions { path, .. } => {
            commands::subscriptions::run_with_options(SubscriptionsRunOptions {
                path: path.clone(),
                stdin_override,
            })
        }
        Commands::Merchants {
            path,
            min_transactions,
            ..
        } => commands::merchants::run_with_options(MerchantsRunOptions {
            path: path.clone(),
            min_transactions: *min_transactions,
            stdin_override,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::cli::parse_from;

    use super::dispatch_with_stdin;

    #[test]
    fn dispatches_to_expected_command_names() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("rows.json");
            assert!(fs::write(&path, "[]").is_ok());
            let path_text = path.display().to_string();

            let cases: [(Vec<&str>, &str); 2] = [
                (
                    vec!["spendscope", "subscriptions", path_text.as_str()],
                    "subscriptions",
                ),
                (
                    vec!["spendscope", "merchants", path_text.as_str()],
                    "merchants",
                ),
            ];

            for (args, expected_command) in cases {
                let parsed = parse_from(args);
                assert!(parsed.is_ok());
                if let Ok(cli) = parsed {
                    let response = dispatch_with_stdin(&cli, Some(String::new()));
                    assert!(response.is_ok());
                    if let Ok(success) = response {
                        assert_eq!(success.command, expected_command);
                    }
                }
            }
        }
    }

    #[test]
    fn piped_stdin_feeds_the_command() {
        let parsed = parse_from(["spendscope", "merchants", "--min-transactions", "1"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let stdin = r#"[{"amount": -450, "created": "2026-03-01T09:00:00Z", "description": "PRET"}]"#;
            let response = dispatch_with_stdin(&cli, Some(stdin.to_string()));
            assert!(response.is_ok());
            if let Ok(success) = response {
                assert_eq!(success.data["transactions_analyzed"], 1);
                assert_eq!(success.data["rows"][0]["merchant"], "PRET");
            }
        }
    }
}
