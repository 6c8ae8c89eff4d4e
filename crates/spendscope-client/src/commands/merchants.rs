use tracing::info;

use crate::analysis::merchants::detect_frequent_merchants;
use crate::analysis::policy::{ANALYSIS_POLICY_V1, ANALYSIS_POLICY_VERSION};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::MerchantsData;
use crate::ingest::load_batch;
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct MerchantsRunOptions {
    pub path: Option<String>,
    /// Falls back to the policy default when unset.
    pub min_transactions: Option<usize>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>, min_transactions: Option<usize>) -> ClientResult<SuccessEnvelope> {
    run_with_options(MerchantsRunOptions {
        path: path.map(std::string::ToString::to_string),
        min_transactions,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: MerchantsRunOptions) -> ClientResult<SuccessEnvelope> {
    let min_transactions = options
        .min_transactions
        .unwrap_or(ANALYSIS_POLICY_V1.min_frequent_transactions);
    if min_transactions == 0 {
        return Err(ClientError::invalid_argument_for_command(
            "`--min-transactions` must be at least 1.",
            Some("merchants"),
        ));
    }

    let batch = load_batch(options.path.as_deref(), options.stdin_override)?;
    let rows = detect_frequent_merchants(&batch.transactions, min_transactions);

    info!(
        source = batch.source.as_str(),
        transactions_analyzed = batch.transactions.len(),
        min_transactions,
        merchants = rows.len(),
        "frequent merchant analysis complete"
    );

    let data = MerchantsData {
        policy_version: ANALYSIS_POLICY_VERSION.to_string(),
        transactions_analyzed: batch.transactions.len(),
        min_transactions,
        rows,
    };

    success("merchants", data)
}
