//! Context-aware log prefixes.

use std::fmt;

/// Logging context for one dashboard client.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub client_id: String,
    pub session_id: Option<String>,
}

impl LogContext {
    pub fn new(client_id: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            session_id: None,
        }
    }

    pub fn with_session(&self, session_id: &str) -> Self {
        Self {
            client_id: self.client_id.clone(),
            session_id: Some(session_id.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.session_id {
            Some(sid) => write!(f, "[client={}] [session={}]", self.client_id, sid),
            None => write!(f, "[client={}]", self.client_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("client-ab12cd34");
        assert_eq!(format!("{}", ctx), "[client=client-ab12cd34]");

        let ctx_with_session = ctx.with_session("session-ef56");
        assert_eq!(
            format!("{}", ctx_with_session),
            "[client=client-ab12cd34] [session=session-ef56]"
        );
    }
}
