use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::analysis::policy::Frequency;

/// A transaction projected from the upstream payload with every default
/// already resolved. `created` is the only field a pipeline may have to skip
/// on.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTransaction {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub created: Option<NaiveDateTime>,
    pub merchant: String,
    pub category: String,
}

impl NormalizedTransaction {
    pub fn is_outgoing(&self) -> bool {
        self.amount < 0
    }

    pub fn abs_amount(&self) -> i64 {
        self.amount.saturating_abs()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub merchant: String,
    pub amount: i64,
    pub currency: String,
    pub frequency: Frequency,
    pub last_date: NaiveDateTime,
    pub next_date: NaiveDateTime,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentMerchant {
    pub merchant: String,
    pub transaction_count: usize,
    pub total_spent: i64,
    pub average_amount: i64,
    pub currency: String,
    pub first_date: NaiveDateTime,
    pub last_date: NaiveDateTime,
    pub categories: Vec<String>,
}
