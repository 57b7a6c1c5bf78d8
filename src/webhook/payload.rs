//! Wire shapes of the webhook payload envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::FeedItem;

/// The envelope the provider wraps every webhook event in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookPayload {
    pub webhook_event_uid: String,
    pub event_timestamp: DateTime<Utc>,
    pub content: WebhookFeedItem,
    pub account_holder_uid: String,
    pub webhook_type: String,
    pub webhook_event_type: String,
}

/// The feed item carried inside a webhook event.
///
/// On the wire this is a regular feed item with a few extra fields
/// inlined alongside it, so the base item is flattened rather than
/// nested under its own key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookFeedItem {
    #[serde(flatten)]
    pub feed_item: FeedItem,
    pub feed_item_failure_reason: String,
    pub master_card_feed_details: Option<MastercardFeedDetails>,
}

/// Card-scheme details attached to Mastercard-sourced feed items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MastercardFeedDetails {
    pub merchant_identifier: String,
    pub mcc: i32,
    pub pos_timestamp: DateTime<Utc>,
    pub card_last4: String,
}
