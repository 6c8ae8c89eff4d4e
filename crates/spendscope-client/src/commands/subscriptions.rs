use tracing::info;

use crate::ClientResult;
use crate::analysis::policy::ANALYSIS_POLICY_VERSION;
use crate::analysis::subscriptions::detect_subscriptions;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SubscriptionsData;
use crate::ingest::load_batch;

#[derive(Debug, Default)]
pub struct SubscriptionsRunOptions {
    pub path: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(SubscriptionsRunOptions {
        path: path.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SubscriptionsRunOptions) -> ClientResult<SuccessEnvelope> {
    let batch = load_batch(options.path.as_deref(), options.stdin_override)?;
    let rows = detect_subscriptions(&batch.transactions);

    info!(
        source = batch.source.as_str(),
        transactions_analyzed = batch.transactions.len(),
        subscriptions = rows.len(),
        "subscription analysis complete"
    );

    let data = SubscriptionsData {
        policy_version: ANALYSIS_POLICY_VERSION.to_string(),
        transactions_analyzed: batch.transactions.len(),
        rows,
    };

    success("subscriptions", data)
}
