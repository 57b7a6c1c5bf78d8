//! Wire models shared across resources.

use serde::{Deserialize, Serialize};

/// A monetary amount in the minor units of its currency.
///
/// Money is carried in minor units (pence in GBP, cents in EUR) to
/// avoid floating-point rounding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amount {
    /// ISO-4217 3 character currency code.
    pub currency: String,
    /// Amount in the minor units of the given currency.
    pub minor_units: i64,
}

impl Amount {
    /// Creates an amount in the given currency.
    #[must_use]
    pub fn new(currency: impl Into<String>, minor_units: i64) -> Self {
        Self {
            currency: currency.into(),
            minor_units,
        }
    }
}

/// A HAL link to a related resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HalLink {
    pub href: String,
    pub templated: bool,
    #[serde(rename = "type")]
    pub link_type: String,
    pub deprecation: String,
    pub name: String,
    pub profile: String,
    pub title: String,
    pub hreflang: String,
}
