//! Transport seam.
//!
//! The actual push-event library (socket.io or similar) is an external
//! collaborator; the core only needs raw frames in arrival order and a way
//! to send commands. `InMemoryTransport` is the reference implementation
//! used throughout the test suite.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use thiserror::Error;

/// One raw frame off the wire: event kind plus JSON payload.
pub type Frame = (String, Value);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("channel closed")]
    Closed,
    #[error("send failed: {0}")]
    Send(String),
}

/// Duplex push-event channel, delivering frames in arrival order.
pub trait Transport: Send {
    /// Endpoint this transport is bound to, for logging.
    fn endpoint(&self) -> &str;

    /// Next pending inbound frame, if any. Never blocks.
    fn try_recv(&mut self) -> Option<Frame>;

    /// Send an outbound frame. No acknowledgment is awaited.
    fn send(&mut self, kind: &str, payload: Value) -> Result<(), TransportError>;

    /// Tear the channel down. Subsequent sends fail with `Closed`.
    fn close(&mut self);
}

/// Queue-backed transport for tests and embedding without a live socket.
///
/// The sent-frame log is behind a shared handle so callers can keep
/// observing it after the transport is boxed into an adapter.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    endpoint: String,
    inbound: VecDeque<Frame>,
    sent: Arc<Mutex<Vec<Frame>>>,
    closed: bool,
}

impl InMemoryTransport {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ..Default::default()
        }
    }

    /// Queue an inbound frame as if the backend had pushed it.
    pub fn push_inbound(&mut self, kind: &str, payload: Value) {
        self.inbound.push_back((kind.to_string(), payload));
    }

    /// Handle onto the frames sent by the client, in send order.
    pub fn sent_frames(&self) -> Arc<Mutex<Vec<Frame>>> {
        self.sent.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Transport for InMemoryTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn try_recv(&mut self) -> Option<Frame> {
        self.inbound.pop_front()
    }

    fn send(&mut self, kind: &str, payload: Value) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        self.sent.lock().push((kind.to_string(), payload));
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
        self.inbound.clear();
    }
}
