//! The banking resources exposed by the API.
//!
//! Each submodule pairs the wire models for one resource with the
//! [`Client`](crate::Client) methods that fetch or mutate it:
//! accounts, cards, contacts, the transaction feed, payments and
//! savings goals. The models re-exported here mirror the provider's
//! JSON shapes; absent fields deserialize to their defaults.

mod accounts;
mod cards;
mod contacts;
mod feed;
mod models;
mod payments;
mod savings;

#[cfg(test)]
mod payments_tests;

pub use accounts::{Account, AccountIdentifiers, Balance};
pub use cards::{Card, CardControl, CurrencyFlag};
pub use contacts::{Contact, ContactAccount};
pub use feed::{FeedItem, FeedRoundUp};
pub use models::{Amount, HalLink};
pub use payments::{
    LocalPayment, PaymentAmount, PaymentOrder, PaymentOrders, RecurrenceRule, ScheduledPayment,
};
pub use savings::{SavingsGoal, SavingsGoalCreated, SavingsGoalRequest, SavingsTransfer};
