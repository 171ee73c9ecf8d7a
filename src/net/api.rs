//! REST calls against the backend auth endpoints.
//!
//! All three endpoints authenticate through the session cookie; none of them
//! needs the cached bearer token.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::envelope::Envelope;
use super::request::{ApiRequest, CredentialPolicy};
use super::transport::{Transport, TransportError};
use super::types::Credentials;
use crate::util::token_store::TokenStore;

fn credentials_body(credentials: &Credentials) -> serde_json::Value {
    serde_json::json!({ "email": credentials.email, "password": credentials.password })
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; HTTP errors arrive as `ok = false`.
    pub async fn current_user(&self) -> Result<Envelope, TransportError> {
        let url = self.endpoints().url(&self.endpoints().me);
        self.fetch_json(ApiRequest::get(url).credential(CredentialPolicy::SessionCookie))
            .await
    }

    /// `POST /auth/login` with `{email, password}`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; HTTP errors arrive as `ok = false`.
    pub async fn login(&self, credentials: &Credentials) -> Result<Envelope, TransportError> {
        let url = self.endpoints().url(&self.endpoints().login);
        self.fetch_json(
            ApiRequest::post(url)
                .json(credentials_body(credentials))
                .credential(CredentialPolicy::SessionCookie),
        )
        .await
    }

    /// `POST /auth/register` with `{email, password}`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; HTTP errors arrive as `ok = false`.
    pub async fn register(&self, credentials: &Credentials) -> Result<Envelope, TransportError> {
        let url = self.endpoints().url(&self.endpoints().register);
        self.fetch_json(
            ApiRequest::post(url)
                .json(credentials_body(credentials))
                .credential(CredentialPolicy::SessionCookie),
        )
        .await
    }
}
