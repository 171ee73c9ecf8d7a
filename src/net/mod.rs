//! Networking: the JSON client wrapper and the auth endpoints built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` describes a call, `transport` sends it, `envelope` normalizes
//! the answer, `client` ties the three together, and `api` names the
//! backend endpoints. `types` holds the wire DTOs.

pub mod api;
pub mod client;
pub mod envelope;
pub mod request;
pub mod transport;
pub mod types;

use client::ApiClient;
use transport::BrowserTransport;
use crate::util::token_store::LocalStorageTokenStore;

/// Client used by the page: `fetch` transport plus `localStorage` token cache.
pub type BrowserClient = ApiClient<BrowserTransport, LocalStorageTokenStore>;
