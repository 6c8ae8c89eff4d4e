pub mod merchants;
pub mod subscriptions;
