use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::analysis::group::{InclusionFilter, MerchantGroup, group_by_merchant};
use crate::analysis::types::{FrequentMerchant, NormalizedTransaction};

#[derive(Debug, Default)]
struct MerchantActivity {
    total_spent: i64,
    categories: BTreeSet<String>,
    dates: Vec<NaiveDateTime>,
}

pub fn detect_frequent_merchants(
    transactions: &[NormalizedTransaction],
    min_transactions: usize,
) -> Vec<FrequentMerchant> {
    let groups = group_by_merchant(transactions, InclusionFilter::FrequentMerchant);

    let mut merchants = groups
        .iter()
        .filter_map(|group| frequent_merchant_from_group(group, min_transactions))
        .collect::<Vec<FrequentMerchant>>();

    merchants.sort_by(compare_merchants);
    merchants
}

fn frequent_merchant_from_group(
    group: &MerchantGroup<'_>,
    min_transactions: usize,
) -> Option<FrequentMerchant> {
    let currency = group.transactions.first()?.currency.clone();

    let mut activity = MerchantActivity::default();
    for transaction in &group.transactions {
        let Some(created) = transaction.created else {
            continue;
        };
        let total_spent = activity.total_spent.checked_add(transaction.abs_amount());
        let Some(total_spent) = total_spent else {
            debug!(merchant = %group.merchant, "merchant total overflows; group dropped");
            return None;
        };
        activity.total_spent = total_spent;
        activity.dates.push(created);
        activity.categories.insert(transaction.category.clone());
    }

    let transaction_count = activity.dates.len();
    if transaction_count == 0 || transaction_count < min_transactions {
        debug!(
            merchant = %group.merchant,
            transaction_count,
            min_transactions,
            "merchant below frequency threshold"
        );
        return None;
    }

    let first_date = activity.dates.iter().min().copied()?;
    let last_date = activity.dates.iter().max().copied()?;
    let divisor = i64::try_from(transaction_count).ok()?;

    Some(FrequentMerchant {
        merchant: group.merchant.clone(),
        transaction_count,
        total_spent: activity.total_spent,
        average_amount: activity.total_spent.div_euclid(divisor),
        currency,
        first_date,
        last_date,
        categories: activity.categories.into_iter().collect(),
    })
}

fn compare_merchants(left: &FrequentMerchant, right: &FrequentMerchant) -> Ordering {
    right
        .transaction_count
        .cmp(&left.transaction_count)
        .then_with(|| right.total_spent.cmp(&left.total_spent))
}
