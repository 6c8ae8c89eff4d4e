use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Deterministic analysis-policy identifier.
///
/// Emitted with every command result so threshold changes stay auditable in
/// diffs and support/debug sessions.
pub const ANALYSIS_POLICY_VERSION: &str = "analysis/v1";

/// Currency rendered with a symbol prefix; every other code is suffixed.
pub const PRIMARY_CURRENCY: &str = "GBP";
pub const PRIMARY_CURRENCY_SYMBOL: &str = "£";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Annual,
}

impl Frequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Weekly => "/week",
            Self::Monthly => "/month",
            Self::Annual => "/year",
        }
    }

    /// Sort rank for subscription output; lower sorts first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Monthly => 0,
            Self::Weekly => 1,
            Self::Annual => 2,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrequencyProfile {
    pub frequency: Frequency,
    pub min_days: f64,
    pub max_days: f64,
    pub min_occurrences: usize,
}

impl FrequencyProfile {
    pub fn day_range(self) -> RangeInclusive<f64> {
        self.min_days..=self.max_days
    }

    pub fn matches(self, occurrences: usize, mean_interval_days: f64) -> bool {
        occurrences >= self.min_occurrences && self.day_range().contains(&mean_interval_days)
    }
}

/// Ordered cadence table. The first row that matches wins.
pub const FREQUENCY_PROFILES: [FrequencyProfile; 3] = [
    FrequencyProfile {
        frequency: Frequency::Weekly,
        min_days: 6.0,
        max_days: 8.0,
        min_occurrences: 3,
    },
    FrequencyProfile {
        frequency: Frequency::Monthly,
        min_days: 27.0,
        max_days: 34.0,
        min_occurrences: 2,
    },
    FrequencyProfile {
        frequency: Frequency::Annual,
        min_days: 360.0,
        max_days: 370.0,
        min_occurrences: 2,
    },
];

/// v1 analysis thresholds.
///
/// Notes:
/// - `min_subscription_amount` is in minor units and inclusive.
/// - `amount_tolerance` is a relative deviation from the group mean.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisPolicy {
    pub min_subscription_amount: i64,
    pub amount_tolerance: f64,
    pub min_frequent_transactions: usize,
    pub weeks_per_month: f64,
    pub months_per_year: f64,
}

impl AnalysisPolicy {
    /// Contribution of one subscription charge to the estimated monthly spend.
    pub fn monthly_equivalent(self, amount: i64, frequency: Frequency) -> f64 {
        let amount = amount as f64;
        match frequency {
            Frequency::Monthly => amount,
            Frequency::Weekly => amount * self.weeks_per_month,
            Frequency::Annual => amount / self.months_per_year,
        }
    }
}

pub const ANALYSIS_POLICY_V1: AnalysisPolicy = AnalysisPolicy {
    min_subscription_amount: 100,
    amount_tolerance: 0.10,
    min_frequent_transactions: 3,
    weeks_per_month: 4.33,
    months_per_year: 12.0,
};

#[cfg(test)]
mod tests {
    use super::{ANALYSIS_POLICY_V1, FREQUENCY_PROFILES, Frequency};

    #[test]
    fn profile_table_keeps_weekly_monthly_annual_order() {
        let order = FREQUENCY_PROFILES
            .iter()
            .map(|profile| profile.frequency)
            .collect::<Vec<Frequency>>();
        assert_eq!(
            order,
            vec![Frequency::Weekly, Frequency::Monthly, Frequency::Annual]
        );
    }

    #[test]
    fn profile_bounds_are_inclusive() {
        let monthly = FREQUENCY_PROFILES[1];
        assert!(monthly.matches(2, 27.0));
        assert!(monthly.matches(2, 34.0));
        assert!(!monthly.matches(2, 26.99));
        assert!(!monthly.matches(2, 34.01));
        assert!(!monthly.matches(1, 30.0));
    }

    #[test]
    fn rank_puts_monthly_before_weekly_before_annual() {
        assert!(Frequency::Monthly.rank() < Frequency::Weekly.rank());
        assert!(Frequency::Weekly.rank() < Frequency::Annual.rank());
    }

    #[test]
    fn monthly_equivalent_scales_weekly_and_annual() {
        let policy = ANALYSIS_POLICY_V1;
        assert!((policy.monthly_equivalent(1000, Frequency::Monthly) - 1000.0).abs() < 1e-9);
        assert!((policy.monthly_equivalent(1000, Frequency::Weekly) - 4330.0).abs() < 1e-9);
        assert!((policy.monthly_equivalent(1200, Frequency::Annual) - 100.0).abs() < 1e-9);
    }
}
