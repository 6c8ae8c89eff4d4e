pub mod cadence;
pub mod consistency;
pub mod date;
pub mod group;
pub mod merchants;
pub mod normalize;
pub mod policy;
pub mod subscriptions;
pub mod types;

pub use merchants::detect_frequent_merchants;
pub use normalize::{RawMerchant, RawTransaction, normalize_batch};
pub use policy::{ANALYSIS_POLICY_V1, Frequency};
pub use subscriptions::detect_subscriptions;
pub use types::{FrequentMerchant, NormalizedTransaction, Subscription};
