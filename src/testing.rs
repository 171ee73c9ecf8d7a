//! Test doubles shared by unit tests: a scripted transport and client builders.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::config::ApiEndpoints;
use crate::net::client::ApiClient;
use crate::net::request::PreparedRequest;
use crate::net::transport::{RawResponse, Transport, TransportError};
use crate::util::token_store::MemoryTokenStore;

/// Replays queued responses in order and records every request it receives.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    sent: RefCell<Vec<PreparedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, content_type: Option<&str>, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            content_type: content_type.map(str::to_owned),
            body: body.to_owned(),
        }));
        self
    }

    pub fn respond_json(self, status: u16, body: serde_json::Value) -> Self {
        self.respond(status, Some("application/json"), &body.to_string())
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError::Network(message.to_owned())));
        self
    }

    pub fn sent(&self) -> Vec<PreparedRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_owned())))
    }
}

pub fn client(transport: ScriptedTransport) -> ApiClient<ScriptedTransport, MemoryTokenStore> {
    ApiClient::new(transport, MemoryTokenStore::new("access_token"), ApiEndpoints::default())
}
