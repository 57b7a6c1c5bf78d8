//! Payment resources: immediate local payments and scheduled orders.

use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::transport::HttpClient;

use super::HalLink;

/// The currency and value of a payment, in major units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentAmount {
    pub currency: String,
    pub amount: f64,
}

/// The pattern for recurring payments.
///
/// Dates travel as plain strings because the provider accepts both
/// whole dates and full timestamps here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurrenceRule {
    pub start_date: String,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<String>,
    pub week_start: String,
}

/// An immediate payment to a contact's account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalPayment {
    pub payment: PaymentAmount,
    pub destination_account_uid: String,
    pub reference: String,
}

/// A payment that recurs on a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduledPayment {
    #[serde(flatten)]
    pub local_payment: LocalPayment,
    pub recurrence_rule: RecurrenceRule,
}

/// A standing payment order as the provider reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentOrder {
    #[serde(rename = "paymentOrderId")]
    pub uid: String,
    pub currency: String,
    pub amount: f64,
    pub reference: String,
    #[serde(rename = "receivingContactAccountId")]
    pub receiving_contact_account_uid: String,
    pub recipient_name: String,
    pub immediate: bool,
    pub recurrence_rule: RecurrenceRule,
    pub start_date: String,
    pub next_date: String,
    pub cancelled_at: String,
    pub payment_type: String,
    #[serde(rename = "mandateId")]
    pub mandate_uid: String,
}

/// A page of payment orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentOrders {
    pub next_page: HalLink,
    pub payment_orders: Vec<PaymentOrder>,
}

impl<C: HttpClient> Client<C> {
    /// Makes an immediate payment to a contact's account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn make_local_payment(&self, payment: &LocalPayment) -> Result<(), Error> {
        self.post_empty("/api/v1/payments/local", payment).await
    }

    /// Returns the customer's scheduled payment orders.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn scheduled_payments(&self) -> Result<PaymentOrders, Error> {
        self.get_json("/api/v1/payments/scheduled").await
    }

    /// Creates a scheduled payment to a contact's account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn create_scheduled_payment(&self, payment: &ScheduledPayment) -> Result<(), Error> {
        self.put_empty("/api/v1/payments/scheduled", payment).await
    }
}
