//! Endpoint configuration.
//!
//! Both endpoints come from the environment; nothing else is configurable
//! and the client holds no durable state.

use std::env;

pub const SOCKET_ENDPOINT_VAR: &str = "REMEDASH_SOCKET_ENDPOINT";
pub const CHAT_ENDPOINT_VAR: &str = "REMEDASH_CHAT_ENDPOINT";

const DEFAULT_SOCKET_ENDPOINT: &str = "http://localhost:5000";
const DEFAULT_CHAT_ENDPOINT: &str =
    "https://kubernetes-failure-predictor.onrender.com/k8s-chat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Push-event channel endpoint.
    pub socket_endpoint: String,
    /// Stateless chat endpoint.
    pub chat_endpoint: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            socket_endpoint: env::var(SOCKET_ENDPOINT_VAR)
                .unwrap_or_else(|_| DEFAULT_SOCKET_ENDPOINT.to_string()),
            chat_endpoint: env::var(CHAT_ENDPOINT_VAR)
                .unwrap_or_else(|_| DEFAULT_CHAT_ENDPOINT.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            socket_endpoint: DEFAULT_SOCKET_ENDPOINT.to_string(),
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
        }
    }
}
