//! Account resources: summaries, identifiers and balances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::transport::HttpClient;

use super::Amount;

/// Basic details of an account held by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub account_uid: String,
    /// Category uid that uncategorised transactions fall into.
    pub default_category: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Scheme-level identifiers for an individual account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountIdentifiers {
    pub account_identifier: String,
    pub bank_identifier: String,
    pub iban: String,
    pub bic: String,
}

/// The balance on an account, broken down by settlement state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Balance {
    pub cleared_balance: Amount,
    pub effective_balance: Amount,
    pub pending_transactions: Amount,
    pub accepted_overdraft: Amount,
    pub amount: Amount,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Accounts {
    accounts: Vec<Account>,
}

impl<C: HttpClient> Client<C> {
    /// Returns the accounts held by the authenticated customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn accounts(&self) -> Result<Vec<Account>, Error> {
        let wrapper: Accounts = self.get_json("/api/v2/accounts").await?;
        Ok(wrapper.accounts)
    }

    /// Returns the scheme identifiers for an individual account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn account_identifiers(
        &self,
        account_uid: &str,
    ) -> Result<AccountIdentifiers, Error> {
        self.get_json(&format!("/api/v2/accounts/{account_uid}/identifiers"))
            .await
    }

    /// Returns the balance for an individual account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn balance(&self, account_uid: &str) -> Result<Balance, Error> {
        self.get_json(&format!("/api/v2/accounts/{account_uid}/balance"))
            .await
    }
}
