use serde::{Deserialize, Serialize};

use crate::analysis::types::{FrequentMerchant, Subscription};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionsData {
    pub policy_version: String,
    pub transactions_analyzed: usize,
    pub rows: Vec<Subscription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantsData {
    pub policy_version: String,
    pub transactions_analyzed: usize,
    pub min_transactions: usize,
    pub rows: Vec<FrequentMerchant>,
}
