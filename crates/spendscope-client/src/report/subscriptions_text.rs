use crate::analysis::date::format_short_date;
use crate::analysis::policy::{ANALYSIS_POLICY_V1, Frequency};
use crate::analysis::types::Subscription;
use crate::report::format::{format_money, format_primary_money};

pub const NO_SUBSCRIPTIONS_MESSAGE: &str = concat!(
    "No subscriptions detected.\n\n",
    "Tip: Subscriptions are detected from recurring payments with consistent amounts over 90 days."
);

const SECTION_ORDER: [Frequency; 3] = [Frequency::Monthly, Frequency::Weekly, Frequency::Annual];

pub fn render_subscriptions(subscriptions: &[Subscription]) -> String {
    if subscriptions.is_empty() {
        return NO_SUBSCRIPTIONS_MESSAGE.to_string();
    }

    let mut lines = vec!["Detected Subscriptions:".to_string(), String::new()];
    let mut monthly_total = 0.0_f64;

    for frequency in SECTION_ORDER {
        let section = subscriptions
            .iter()
            .filter(|subscription| subscription.frequency == frequency)
            .collect::<Vec<&Subscription>>();
        if section.is_empty() {
            continue;
        }

        lines.push(format!("{}:", frequency.label()));
        for subscription in section {
            lines.push(format!(
                "  - {}: {}{} (next: ~{})",
                subscription.merchant,
                format_money(subscription.amount, &subscription.currency),
                frequency.suffix(),
                format_short_date(&subscription.next_date)
            ));
            monthly_total +=
                ANALYSIS_POLICY_V1.monthly_equivalent(subscription.amount, frequency);
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "Estimated monthly total: {}",
        format_primary_money(monthly_total as i64)
    ));
    lines.join("\n")
}
