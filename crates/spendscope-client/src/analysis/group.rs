use std::collections::BTreeMap;

use crate::analysis::types::NormalizedTransaction;

/// Which transactions a pipeline lets into its merchant groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionFilter {
    /// Outgoing charges whose magnitude is at least `min_amount` minor units.
    Subscription { min_amount: i64 },
    /// Every outgoing charge.
    FrequentMerchant,
}

impl InclusionFilter {
    pub fn includes(self, transaction: &NormalizedTransaction) -> bool {
        if !transaction.is_outgoing() {
            return false;
        }
        match self {
            Self::Subscription { min_amount } => transaction.abs_amount() >= min_amount,
            Self::FrequentMerchant => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MerchantGroup<'a> {
    pub merchant: String,
    pub transactions: Vec<&'a NormalizedTransaction>,
}

/// Merchant name -> transactions, built once per analysis call.
///
/// Groups iterate in first-seen order and each group keeps batch order, so a
/// fixed input order always yields the same output order.
#[derive(Debug, Clone, Default)]
pub struct MerchantGroups<'a> {
    index: BTreeMap<String, usize>,
    groups: Vec<MerchantGroup<'a>>,
}

impl<'a> MerchantGroups<'a> {
    fn push(&mut self, transaction: &'a NormalizedTransaction) {
        let slot = match self.index.get(&transaction.merchant) {
            Some(slot) => *slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(transaction.merchant.clone(), slot);
                self.groups.push(MerchantGroup {
                    merchant: transaction.merchant.clone(),
                    transactions: Vec::new(),
                });
                slot
            }
        };
        self.groups[slot].transactions.push(transaction);
    }

    pub fn get(&self, merchant: &str) -> Option<&MerchantGroup<'a>> {
        self.index.get(merchant).map(|slot| &self.groups[*slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &MerchantGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn group_by_merchant(
    transactions: &[NormalizedTransaction],
    filter: InclusionFilter,
) -> MerchantGroups<'_> {
    let mut groups = MerchantGroups::default();
    for transaction in transactions {
        if filter.includes(transaction) {
            groups.push(transaction);
        }
    }
    groups
}
