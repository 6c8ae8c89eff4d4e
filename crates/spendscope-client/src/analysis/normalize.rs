use tracing::debug;

use crate::analysis::date::parse_created_at;
use crate::analysis::policy::PRIMARY_CURRENCY;
use crate::analysis::types::NormalizedTransaction;

pub const UNKNOWN_MERCHANT: &str = "Unknown";
pub const DEFAULT_CATEGORY: &str = "general";

/// Upstream merchant field: the expanded object when the fetch asked for it,
/// otherwise a bare merchant id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMerchant {
    Expanded { name: Option<String> },
    Reference(String),
}

/// Loosely typed transaction exactly as the collaborator handed it over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTransaction {
    pub id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub created: Option<String>,
    pub merchant: Option<RawMerchant>,
    pub description: Option<String>,
    pub category: Option<String>,
}

pub fn merchant_display_name(merchant: Option<&RawMerchant>, description: Option<&str>) -> String {
    if let Some(RawMerchant::Expanded { name: Some(name) }) = merchant
        && !name.is_empty()
    {
        return name.clone();
    }

    match description {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => UNKNOWN_MERCHANT.to_string(),
    }
}

pub fn normalize_transaction(raw: &RawTransaction) -> NormalizedTransaction {
    let merchant = merchant_display_name(raw.merchant.as_ref(), raw.description.as_deref());
    let created = raw.created.as_deref().and_then(parse_created_at);
    if created.is_none() {
        debug!(
            id = raw.id.as_deref().unwrap_or(""),
            created = raw.created.as_deref().unwrap_or(""),
            "transaction has no parsable created timestamp"
        );
    }

    NormalizedTransaction {
        id: raw.id.clone().unwrap_or_default(),
        amount: raw.amount.unwrap_or(0),
        currency: raw
            .currency
            .clone()
            .unwrap_or_else(|| PRIMARY_CURRENCY.to_string()),
        created,
        merchant,
        category: raw
            .category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
    }
}

pub fn normalize_batch(rows: &[RawTransaction]) -> Vec<NormalizedTransaction> {
    rows.iter().map(normalize_transaction).collect()
}
