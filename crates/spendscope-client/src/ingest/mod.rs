mod input;
mod parse;

use tracing::debug;

use crate::ClientResult;
use crate::analysis::normalize::normalize_batch;
use crate::analysis::types::NormalizedTransaction;

pub use input::SourceKind;

#[derive(Debug, Clone)]
pub struct LoadedBatch {
    pub source: SourceKind,
    pub transactions: Vec<NormalizedTransaction>,
}

/// Reads a batch from `path` (or stdin) and projects every record into a
/// [`NormalizedTransaction`].
pub fn load_batch(path: Option<&str>, stdin_override: Option<String>) -> ClientResult<LoadedBatch> {
    let source = input::resolve_source(path, stdin_override)?;
    let raw = parse::parse_source(&source.content)?;
    let transactions = normalize_batch(&raw);
    debug!(
        source = source.kind.as_str(),
        records = transactions.len(),
        "loaded transaction batch"
    );
    Ok(LoadedBatch {
        source: source.kind,
        transactions,
    })
}
