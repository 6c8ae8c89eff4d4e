use clap::{Parser, Subcommand};

pub fn parse_min_transactions(value: &str) -> Result<usize, String> {
    let parsed = value
        .trim()
        .parse::<usize>()
        .map_err(|_| "min-transactions must be a whole number".to_string())?;
    if parsed == 0 {
        return Err("min-transactions must be at least 1".to_string());
    }
    Ok(parsed)
}

/// Extended help shown after `spendscope subscriptions --help` and
/// `spendscope merchants --help`.
pub const INPUT_AFTER_HELP: &str = "\
Input:
  <path> is a local file path. Use `-` (or omit the path) to read stdin.
  Example: cat transactions.json | spendscope subscriptions

  Accepted formats:
    JSON  one top-level array of transaction objects,
          or an object with a `transactions` array
    CSV   one header row with the field names below

Transaction fields:
  created (required):
    ISO-8601 UTC timestamp, e.g. `2026-01-14T10:30:45.123Z`.
    Records with an unreadable timestamp are skipped, not rejected.

  amount (required):
    Signed integer in minor units. Negative = money out.
    Example: `-999` is a 9.99 charge.

  currency (optional):
    3-letter code. Defaults to GBP.

  merchant (optional):
    An object with a `name`, or a bare merchant id string.
    When missing, `description` is used, then `Unknown`.

  description, category, id (optional):
    category defaults to `general`.

  CSV example:
  created,amount,currency,description,merchant,category
  2026-01-14T10:30:45Z,-999,GBP,NETFLIX.COM,Netflix,entertainment
";

#[derive(Debug, Parser)]
#[command(
    name = "spendscope",
    version,
    about = "subscription and frequent-merchant reports from transaction exports",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect recurring subscription charges
    #[command(after_long_help = INPUT_AFTER_HELP)]
    Subscriptions {
        /// Transaction file path, or `-` for stdin
        path: Option<String>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// List merchants you pay most often
    #[command(after_long_help = INPUT_AFTER_HELP)]
    Merchants {
        /// Transaction file path, or `-` for stdin
        path: Option<String>,
        /// Minimum dated transactions for a merchant to be listed
        #[arg(long, value_parser = parse_min_transactions)]
        min_transactions: Option<usize>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
