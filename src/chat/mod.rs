//! Stateless chat call.
//!
//! A single request/response exchange with the chat endpoint, outside the
//! reconciliation core: no session state, no retries. Every failure mode is
//! converted to a fixed fallback reply so the caller never sees a hard
//! error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reply used when the response parses but carries no `reply` field.
pub const EMPTY_REPLY_FALLBACK: &str = "No response received.";
/// Reply used when the request fails or the response is malformed.
pub const TRANSPORT_FAILURE_FALLBACK: &str = "Error contacting backend.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Request(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    #[serde(rename = "userQuery")]
    pub user_query: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

/// Performs the HTTP-style POST. Implemented by the embedding application;
/// returns the raw response body.
pub trait ChatBackend {
    fn post(&mut self, endpoint: &str, body: &str) -> Result<String, ChatError>;
}

/// Thin client over a [`ChatBackend`].
pub struct ChatClient<B: ChatBackend> {
    endpoint: String,
    backend: B,
}

impl<B: ChatBackend> ChatClient<B> {
    pub fn new(endpoint: &str, backend: B) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            backend,
        }
    }

    /// Ask one question. Infallible by design: transport failures and
    /// malformed responses degrade to fixed fallback text.
    pub fn ask(&mut self, user_query: &str) -> String {
        let request = ChatRequest {
            user_query: user_query.to_string(),
        };
        let body = match serde_json::to_string(&request) {
            Ok(b) => b,
            Err(e) => {
                log::warn!("CHAT_ENCODE_FAILED error={}", e);
                return TRANSPORT_FAILURE_FALLBACK.to_string();
            }
        };

        let response = match self.backend.post(&self.endpoint, &body) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("CHAT_REQUEST_FAILED endpoint={} error={}", self.endpoint, e);
                return TRANSPORT_FAILURE_FALLBACK.to_string();
            }
        };

        match serde_json::from_str::<ChatReply>(&response) {
            Ok(ChatReply { reply: Some(reply) }) => reply,
            Ok(ChatReply { reply: None }) => EMPTY_REPLY_FALLBACK.to_string(),
            Err(e) => {
                log::warn!("CHAT_RESPONSE_MALFORMED error={}", e);
                TRANSPORT_FAILURE_FALLBACK.to_string()
            }
        }
    }
}
