mod error_text;
mod json;
mod mode;
mod report_text;

use std::io::{self, Write};

use spendscope_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_closed_pipe(&mut stdout, text.as_bytes())
}

fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_closed_pipe(&mut stdout, format!("{text}\n").as_bytes())
}

// A reader that exits early (`| head`) is not a failure.
fn write_tolerating_closed_pipe(writer: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    match writer.write_all(bytes).and_then(|()| writer.flush()) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(error) => Err(error),
    }
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "subscriptions" => report_text::render_subscriptions_report(&success.data),
        "merchants" => report_text::render_merchants_report(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::write_tolerating_closed_pipe;

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_is_swallowed() {
        let mut writer = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(write_tolerating_closed_pipe(&mut writer, b"report").is_ok());
    }

    #[test]
    fn other_write_errors_surface() {
        let mut writer = FailingWriter(io::ErrorKind::PermissionDenied);
        assert!(write_tolerating_closed_pipe(&mut writer, b"report").is_err());
    }

    #[test]
    fn successful_writes_reach_the_buffer() {
        let mut buffer = Vec::new();
        assert!(write_tolerating_closed_pipe(&mut buffer, b"report").is_ok());
        assert_eq!(buffer, b"report");
    }
}
