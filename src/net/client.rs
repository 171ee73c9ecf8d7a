//! JSON client wrapper: prepare, send, classify.
//!
//! ERROR HANDLING
//! ==============
//! HTTP error statuses never fail a call; they come back as `ok = false`
//! envelopes carrying the parsed error body. Only a [`TransportError`]
//! (encoding or network) reaches the caller as `Err`.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use super::envelope::Envelope;
use super::request::ApiRequest;
use super::transport::{Transport, TransportError};
use crate::config::ApiEndpoints;
use crate::util::token_store::TokenStore;

pub struct ApiClient<T, S> {
    transport: T,
    tokens: S,
    endpoints: ApiEndpoints,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(transport: T, tokens: S, endpoints: ApiEndpoints) -> Self {
        Self { transport, tokens, endpoints }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and normalize the response into an [`Envelope`].
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the body cannot be encoded or the
    /// network exchange fails.
    pub async fn fetch_json(&self, request: ApiRequest) -> Result<Envelope, TransportError> {
        let token = self.tokens.load();
        let prepared = request.prepare(token.as_deref())?;
        log::debug!("{} {}", prepared.method.as_str(), prepared.url);

        let raw = self.transport.send(&prepared).await.inspect_err(|e| {
            log::debug!("{} {} failed: {e}", prepared.method.as_str(), prepared.url);
        })?;
        let envelope = Envelope::from_raw(&raw);
        log::debug!("{} {} -> {}", prepared.method.as_str(), prepared.url, envelope.status);
        Ok(envelope)
    }
}
