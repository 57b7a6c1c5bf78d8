//! Transaction feed resources.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::transport::HttpClient;

use super::Amount;

/// A single transaction in the customer's feed.
///
/// Fields the provider omits deserialize to their defaults, so absent
/// timestamps read as the Unix epoch and absent amounts as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedItem {
    pub feed_item_uid: String,
    pub category_uid: String,
    pub account_uid: String,
    pub amount: Amount,
    pub source_amount: Amount,
    pub direction: String,
    pub updated_at: DateTime<Utc>,
    pub transaction_time: DateTime<Utc>,
    pub settlement_time: DateTime<Utc>,
    pub retry_allocation_until_time: DateTime<Utc>,
    pub source: String,
    pub source_sub_type: String,
    pub status: String,
    pub transaction_application_user_uid: String,
    pub counter_party_type: String,
    pub counter_party_uid: String,
    pub counter_party_name: String,
    pub counter_party_sub_entity_uid: String,
    pub counter_party_sub_entity_name: String,
    pub counter_party_sub_entity_identifier: String,
    // The provider's wire key really is missing the "y" in "Party".
    pub counter_part_sub_entity_sub_identifier: String,
    pub exchange_rate: f64,
    pub total_fees: f64,
    pub total_fee_amount: Amount,
    pub reference: String,
    pub country: String,
    pub spending_category: String,
    pub user_note: String,
    pub round_up: FeedRoundUp,
    pub has_attachment: bool,
    pub receipt_present: bool,
}

/// The round-up attached to a feed item, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedRoundUp {
    pub goal_category_uid: String,
    pub amount: Amount,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Feed {
    feed_items: Vec<FeedItem>,
}

impl<C: HttpClient> Client<C> {
    /// Returns the transaction feed for an account category.
    ///
    /// Passing `changes_since` limits the feed to items updated after
    /// the given instant; `None` fetches the full feed.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn feed(
        &self,
        account_uid: &str,
        category_uid: &str,
        changes_since: Option<DateTime<Utc>>,
    ) -> Result<Vec<FeedItem>, Error> {
        let path = format!("/api/v2/feed/account/{account_uid}/category/{category_uid}");
        let mut query = Vec::new();
        if let Some(since) = changes_since {
            query.push((
                "changesSince",
                since.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ));
        }
        let wrapper: Feed = self.get_json_with_query(&path, &query).await?;
        Ok(wrapper.feed_items)
    }

    /// Returns a single feed item.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn feed_item(
        &self,
        account_uid: &str,
        category_uid: &str,
        feed_item_uid: &str,
    ) -> Result<FeedItem, Error> {
        self.get_json(&format!(
            "/api/v2/feed/account/{account_uid}/category/{category_uid}/{feed_item_uid}"
        ))
        .await
    }
}
