//! Transport seam between the client wrapper and the browser fetch API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with credentials
//! mode `include`, so the session cookie rides along.
//! Native builds: [`BrowserTransport`] reports [`TransportError::Unavailable`].

#![allow(clippy::unused_async)]

use super::request::PreparedRequest;
#[cfg(feature = "hydrate")]
use super::request::Method;

/// Status, content type, and body text of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Failures that prevent an HTTP exchange from completing at all.
///
/// HTTP error statuses are not transport errors; they arrive as a
/// [`RawResponse`] and become `ok = false` envelopes.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request body could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("http transport unavailable outside the browser")]
    Unavailable,
}

/// Sends one prepared request and returns the raw response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response could be obtained.
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .credentials(web_sys::RequestCredentials::Include);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match &request.body {
                Some(text) => builder.body(text.clone()),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let resp = built.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let content_type = resp.headers().get("content-type");
            // An unreadable body degrades like an unparseable one.
            let body = match resp.text().await {
                Ok(text) => text,
                Err(e) => {
                    log::debug!("response body unreadable for {}: {e}", request.url);
                    String::new()
                }
            };
            Ok(RawResponse { status, content_type, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
