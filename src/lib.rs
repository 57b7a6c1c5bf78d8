//! Cygnet: a client for the Cygnet Bank REST API.
//!
//! The crate covers two independent concerns:
//!
//! - Outbound: an authenticated [`Client`] whose endpoint methods
//!   (accounts, cards, contacts, the transaction feed, payments and
//!   savings goals) all funnel through one request/response pipeline.
//! - Inbound: [`webhook::verify`], which cryptographically checks the
//!   detached RSA signature the provider attaches to every callback.
//!
//! # Example
//!
//! ```no_run
//! use cygnet::Client;
//!
//! # async fn example() -> Result<(), cygnet::Error> {
//! let client = Client::new("personal-access-token");
//! for account in client.accounts().await? {
//!     let balance = client.balance(&account.account_uid).await?;
//!     println!("{}: {}", account.account_uid, balance.amount.minor_units);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod transport;
pub mod webhook;

pub use client::{Client, Error, ErrorDetail};
