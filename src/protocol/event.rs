//! Inbound push events and outbound commands.
//!
//! Each event kind maps to exactly one `PushEvent` variant so the store's
//! transition function can match exhaustively. Decoding is deliberately
//! forgiving: unknown kinds are reported as such, and partial payloads fall
//! back to defaults instead of failing (one bad event must not take the
//! dashboard down).

use serde_json::Value;

use crate::protocol::model::{MetricsSnapshot, SampleId, StatsReport};

/// The set of recognized inbound event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Connect,
    Disconnect,
    Log,
    Stats,
    Metrics,
    Remediation,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::Connect,
        EventKind::Disconnect,
        EventKind::Log,
        EventKind::Stats,
        EventKind::Metrics,
        EventKind::Remediation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Connect => "connect",
            EventKind::Disconnect => "disconnect",
            EventKind::Log => "log",
            EventKind::Stats => "stats",
            EventKind::Metrics => "metrics",
            EventKind::Remediation => "remediation",
        }
    }

    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "connect" => Some(EventKind::Connect),
            "disconnect" => Some(EventKind::Disconnect),
            "log" => Some(EventKind::Log),
            "stats" => Some(EventKind::Stats),
            "metrics" => Some(EventKind::Metrics),
            "remediation" => Some(EventKind::Remediation),
            _ => None,
        }
    }
}

/// A decoded inbound push event.
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    Connect,
    Disconnect,
    Log { message: String },
    Stats(StatsReport),
    Metrics {
        metrics: MetricsSnapshot,
        sample: Option<SampleId>,
    },
    Remediation {
        steps: Vec<String>,
        sample: Option<SampleId>,
    },
}

impl PushEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PushEvent::Connect => EventKind::Connect,
            PushEvent::Disconnect => EventKind::Disconnect,
            PushEvent::Log { .. } => EventKind::Log,
            PushEvent::Stats(_) => EventKind::Stats,
            PushEvent::Metrics { .. } => EventKind::Metrics,
            PushEvent::Remediation { .. } => EventKind::Remediation,
        }
    }

    /// Decode a raw frame payload into a typed event.
    ///
    /// Missing or malformed fields degrade to defaults/absent values; this
    /// never fails.
    pub fn decode(kind: EventKind, payload: &Value) -> PushEvent {
        match kind {
            EventKind::Connect => PushEvent::Connect,
            EventKind::Disconnect => PushEvent::Disconnect,
            EventKind::Log => PushEvent::Log {
                message: payload
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string(),
            },
            EventKind::Stats => {
                let report = serde_json::from_value(payload.clone()).unwrap_or_default();
                PushEvent::Stats(report)
            }
            EventKind::Metrics => {
                let metrics = payload
                    .get("metrics")
                    .and_then(|m| serde_json::from_value(m.clone()).ok())
                    .unwrap_or_default();
                PushEvent::Metrics {
                    metrics,
                    sample: payload.get("sample").and_then(|s| s.as_u64()),
                }
            }
            EventKind::Remediation => {
                let steps = payload
                    .get("steps")
                    .and_then(|s| s.as_array())
                    .map(|arr| {
                        arr.iter()
                            .filter_map(|v| v.as_str())
                            .map(|s| s.to_string())
                            .collect()
                    })
                    .unwrap_or_default();
                PushEvent::Remediation {
                    steps,
                    sample: payload.get("sample").and_then(|s| s.as_u64()),
                }
            }
        }
    }
}

/// Outbound commands. Fire-and-forget, no acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartAnalysis,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::StartAnalysis => "start_analysis",
        }
    }

    /// Command payload as sent on the wire. `start_analysis` carries none.
    pub fn payload(&self) -> Value {
        match self {
            Command::StartAnalysis => Value::Null,
        }
    }
}
