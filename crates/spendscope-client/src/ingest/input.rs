use std::fs;
use std::io::{IsTerminal, Read};

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceKind {
    File,
    Stdin,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Stdin => "stdin",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedSource {
    pub(crate) kind: SourceKind,
    pub(crate) content: String,
}

pub(crate) fn resolve_source(
    path: Option<&str>,
    stdin_override: Option<String>,
) -> ClientResult<ResolvedSource> {
    let stdin_body = read_stdin(stdin_override)?;

    match path {
        Some("-") => match stdin_body {
            Some(content) => Ok(ResolvedSource {
                kind: SourceKind::Stdin,
                content,
            }),
            None => Err(ClientError::invalid_input(
                "Path `-` means stdin input, but stdin was empty. Pipe JSON/CSV input or pass a file path.",
            )),
        },
        Some(path_value) => {
            if stdin_body.is_some() {
                return Err(ClientError::invalid_argument_with_recovery(
                    "Both stdin and file input were provided. Pass exactly one source: either a file path or piped stdin.",
                    vec!["Drop the path argument or stop piping stdin.".to_string()],
                ));
            }

            let content = fs::read_to_string(path_value).map_err(|error| {
                ClientError::invalid_argument_with_recovery(
                    &format!("Could not read transaction file `{path_value}`: {error}"),
                    vec![
                        "Verify the path exists and is readable.".to_string(),
                        "Rerun the command with the corrected path.".to_string(),
                    ],
                )
            })?;
            Ok(ResolvedSource {
                kind: SourceKind::File,
                content,
            })
        }
        None => match stdin_body {
            Some(content) => Ok(ResolvedSource {
                kind: SourceKind::Stdin,
                content,
            }),
            None => Err(ClientError::invalid_input(
                "No transaction source provided. Pass a file path or pipe input via stdin.",
            )),
        },
    }
}

// Whitespace-only stdin counts as no stdin.
fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    let buffer = match stdin_override {
        Some(value) => value,
        None => {
            if std::io::stdin().is_terminal() {
                return Ok(None);
            }
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|error| {
                    ClientError::invalid_argument_with_recovery(
                        &format!("Could not read stdin: {error}"),
                        vec![
                            "Retry with an explicit file path argument.".to_string(),
                            "Or rerun with valid stdin content.".to_string(),
                        ],
                    )
                })?;
            buffer
        }
    };

    if buffer.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(buffer))
}
