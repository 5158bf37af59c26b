//! Log lines and severity inference.
//!
//! The backend does not tag log messages with a level; severity is inferred
//! from the emoji markers it embeds (the rendering layer colors lines by
//! this). Lines are opaque otherwise and never mutated after append.

use serde::{Deserialize, Serialize};

/// Marker prefixed to the synthetic connect line.
pub const CONNECTED_MESSAGE: &str = "🔌 Connected to backend server";
/// Marker prefixed to the synthetic disconnect line.
pub const DISCONNECTED_MESSAGE: &str = "❌ Disconnected from backend server";
/// Marker the backend embeds in its final log line of a run.
pub const RUN_COMPLETE_MARKER: &str = "🏁";

/// Severity inferred from embedded markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Success,
    Advice,
    Info,
}

impl Severity {
    pub fn infer(message: &str) -> Self {
        if message.contains('❌') {
            Severity::Error
        } else if message.contains('✅') {
            Severity::Success
        } else if message.contains('💡') {
            Severity::Advice
        } else {
            Severity::Info
        }
    }
}

/// One line of the chronological log stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogLine {
    pub message: String,
    pub severity: Severity,
}

impl LogLine {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let severity = Severity::infer(&message);
        Self { message, severity }
    }
}
