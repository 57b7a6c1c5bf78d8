//! Contact (payee) resources.
//!
//! The contacts endpoints are v1 and wrap their collections in HAL
//! envelopes; the methods here unwrap those so callers see plain
//! values.

use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::transport::HttpClient;

/// A payee known to the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(rename = "id")]
    pub uid: String,
    pub name: String,
}

/// An account belonging to a payee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactAccount {
    #[serde(rename = "id")]
    pub uid: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub name: String,
    pub account_number: String,
    pub sort_code: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HalContacts {
    #[serde(rename = "_embedded")]
    embedded: EmbeddedContacts,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmbeddedContacts {
    contacts: Vec<Contact>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ContactAccounts {
    contact_accounts: Vec<ContactAccount>,
}

impl<C: HttpClient> Client<C> {
    /// Returns the customer's contacts.
    ///
    /// A response without an embedded collection yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn contacts(&self) -> Result<Vec<Contact>, Error> {
        let wrapper: HalContacts = self.get_json("/api/v1/contacts").await?;
        Ok(wrapper.embedded.contacts)
    }

    /// Returns an individual contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn contact(&self, contact_uid: &str) -> Result<Contact, Error> {
        self.get_json(&format!("/api/v1/contacts/{contact_uid}"))
            .await
    }

    /// Deletes a contact. The API answers 204 on success.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn delete_contact(&self, contact_uid: &str) -> Result<(), Error> {
        self.delete_empty(&format!("/api/v1/contacts/{contact_uid}"))
            .await
    }

    /// Creates a contact from the given payee account details.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn create_contact_account(&self, account: &ContactAccount) -> Result<(), Error> {
        self.post_empty("/api/v1/contacts", account).await
    }

    /// Returns the accounts held by a contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn contact_accounts(&self, contact_uid: &str) -> Result<Vec<ContactAccount>, Error> {
        let wrapper: ContactAccounts = self
            .get_json(&format!("/api/v1/contacts/{contact_uid}/accounts"))
            .await?;
        Ok(wrapper.contact_accounts)
    }

    /// Returns one account held by a contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn contact_account(
        &self,
        contact_uid: &str,
        account_uid: &str,
    ) -> Result<ContactAccount, Error> {
        self.get_json(&format!(
            "/api/v1/contacts/{contact_uid}/accounts/{account_uid}"
        ))
        .await
    }
}
