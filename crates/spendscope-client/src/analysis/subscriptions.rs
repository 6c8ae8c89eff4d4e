use std::cmp::Ordering;

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::analysis::cadence::detect_cadence;
use crate::analysis::consistency::amounts_are_consistent;
use crate::analysis::group::{InclusionFilter, MerchantGroup, group_by_merchant};
use crate::analysis::policy::{ANALYSIS_POLICY_V1, AnalysisPolicy, Frequency, PRIMARY_CURRENCY};
use crate::analysis::types::{NormalizedTransaction, Subscription};

pub fn detect_subscriptions(transactions: &[NormalizedTransaction]) -> Vec<Subscription> {
    detect_subscriptions_with_policy(transactions, ANALYSIS_POLICY_V1)
}

pub fn detect_subscriptions_with_policy(
    transactions: &[NormalizedTransaction],
    policy: AnalysisPolicy,
) -> Vec<Subscription> {
    let filter = InclusionFilter::Subscription {
        min_amount: policy.min_subscription_amount,
    };
    let groups = group_by_merchant(transactions, filter);

    let mut subscriptions = groups
        .iter()
        .filter_map(|group| subscription_from_group(group, policy))
        .collect::<Vec<Subscription>>();

    subscriptions.sort_by(compare_subscriptions);
    subscriptions
}

fn subscription_from_group(
    group: &MerchantGroup<'_>,
    policy: AnalysisPolicy,
) -> Option<Subscription> {
    let mut dates: Vec<NaiveDateTime> = Vec::new();
    let mut amounts: Vec<i64> = Vec::new();
    let mut currency = PRIMARY_CURRENCY.to_string();

    for transaction in &group.transactions {
        let Some(created) = transaction.created else {
            continue;
        };
        dates.push(created);
        amounts.push(transaction.abs_amount());
        currency.clone_from(&transaction.currency);
    }

    if dates.len() < 2 {
        debug!(
            merchant = %group.merchant,
            dated = dates.len(),
            "skipping subscription group with fewer than two dated charges"
        );
        return None;
    }

    let cadence = detect_cadence(&dates);
    let Some(frequency) = cadence.frequency else {
        debug!(
            merchant = %group.merchant,
            mean_interval_days = cadence.mean_interval_days,
            "no cadence matched"
        );
        return None;
    };
    if !amounts_are_consistent(&amounts, policy.amount_tolerance) {
        debug!(merchant = %group.merchant, "amounts vary beyond tolerance");
        return None;
    }

    let average = floor_mean(&amounts)?;
    let last_date = dates.iter().max().copied()?;
    debug!(
        merchant = %group.merchant,
        frequency = frequency.as_str(),
        amount = average,
        "subscription detected"
    );

    Some(Subscription {
        merchant: group.merchant.clone(),
        amount: average,
        currency,
        frequency,
        last_date,
        next_date: predict_next_date(last_date, frequency, cadence.mean_interval_days),
        transaction_count: dates.len(),
    })
}

// Summed in i128 so large charges cannot overflow; the mean of i64 values
// always fits back into i64.
fn floor_mean(amounts: &[i64]) -> Option<i64> {
    let count = i128::try_from(amounts.len()).ok()?;
    let total = amounts.iter().map(|amount| i128::from(*amount)).sum::<i128>();
    i64::try_from(total.div_euclid(count)).ok()
}

/// Weekly and annual use fixed steps; monthly follows the measured interval
/// so billing-day drift carries forward.
pub fn predict_next_date(
    last_date: NaiveDateTime,
    frequency: Frequency,
    mean_interval_days: f64,
) -> NaiveDateTime {
    let step_days = match frequency {
        Frequency::Weekly => 7,
        Frequency::Annual => 365,
        Frequency::Monthly => rounded_days(mean_interval_days),
    };
    last_date + Duration::days(step_days)
}

// Half-way values round to even, so a 30.5 day mean steps 30 days.
fn rounded_days(mean_interval_days: f64) -> i64 {
    mean_interval_days.round_ties_even() as i64
}

fn compare_subscriptions(left: &Subscription, right: &Subscription) -> Ordering {
    left.frequency
        .rank()
        .cmp(&right.frequency.rank())
        .then_with(|| right.amount.cmp(&left.amount))
}
