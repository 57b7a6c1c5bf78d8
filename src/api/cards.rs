//! Card resources and card controls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::transport::HttpClient;

/// Details of a card issued to the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub card_uid: String,
    pub public_token: String,
    pub enabled: bool,
    pub cancelled: bool,
    pub activation_requested: bool,
    pub activated: bool,
    pub wallet_notifications_enabled: bool,
    pub pos_enabled: bool,
    pub atm_enabled: bool,
    pub online_enabled: bool,
    pub mobile_wallet_enabled: bool,
    pub gambling_enabled: bool,
    pub mag_stripe_enabled: bool,
    pub end_of_card_number: String,
    pub currency_flags: Vec<CurrencyFlag>,
    pub card_association_uid: String,
    pub gambling_to_be_enabled_at: DateTime<Utc>,
}

/// Whether a card may transact in a particular currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyFlag {
    pub enabled: bool,
    pub currency: String,
}

/// A card control that can be toggled independently of the card's
/// master switch.
///
/// The API exposes one endpoint per control, named `{control}-enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardControl {
    /// ATM withdrawals.
    Atm,
    /// Contactless payments.
    Contactless,
    /// In-person spending in other countries.
    CountrySpending,
    /// Gambling transactions.
    Gambling,
    /// Spending outside the account's home country.
    InternationalSpending,
    /// In-person spending in the account's home country.
    LocalSpending,
    /// Magnetic stripe payments.
    MagStripe,
    /// Mobile wallet payments.
    MobileWallet,
    /// Online payments.
    Online,
    /// Point-of-sale payments.
    Pos,
}

impl CardControl {
    /// The path segment the API uses for this control.
    #[must_use]
    pub const fn as_segment(self) -> &'static str {
        match self {
            Self::Atm => "atm",
            Self::Contactless => "contactless",
            Self::CountrySpending => "country-spending",
            Self::Gambling => "gambling",
            Self::InternationalSpending => "international-spending",
            Self::LocalSpending => "local-spending",
            Self::MagStripe => "mag-stripe",
            Self::MobileWallet => "mobile-wallet",
            Self::Online => "online",
            Self::Pos => "pos",
        }
    }
}

#[derive(Debug, Serialize)]
struct EnabledRequest {
    enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Cards {
    cards: Vec<Card>,
}

impl<C: HttpClient> Client<C> {
    /// Returns the cards issued to the customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn cards(&self) -> Result<Vec<Card>, Error> {
        let wrapper: Cards = self.get_json("/api/v2/cards").await?;
        Ok(wrapper.cards)
    }

    /// Turns a card on or off entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn enable_card(&self, card_uid: &str, enabled: bool) -> Result<(), Error> {
        self.put_empty(
            &format!("/api/v2/cards/{card_uid}/controls/enabled"),
            &EnabledRequest { enabled },
        )
        .await
    }

    /// Toggles an individual control on a card.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn set_card_control(
        &self,
        card_uid: &str,
        control: CardControl,
        enabled: bool,
    ) -> Result<(), Error> {
        let path = format!(
            "/api/v2/cards/{card_uid}/controls/{}-enabled",
            control.as_segment()
        );
        self.put_empty(&path, &EnabledRequest { enabled }).await
    }
}
