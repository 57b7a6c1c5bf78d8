//! The request pipeline: building, dispatching, and classifying API calls.
//!
//! This module provides:
//! - The authenticated API client ([`Client`])
//! - The operation error taxonomy ([`Error`])
//! - The provider's error body shape ([`ErrorDetail`])
//!
//! Endpoint methods live under [`crate::api`] and all funnel through
//! [`Client`]'s pipeline.

mod error;
mod pipeline;


pub use error::{Error, ErrorDetail};
pub use pipeline::Client;
