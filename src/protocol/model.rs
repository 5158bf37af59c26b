//! Payload models for push events.
//!
//! The backend is loose about value shapes: `success_rate` arrives either as
//! a preformatted string ("94.1%") or a bare number, and metric readings are
//! rounded floats in production but may be strings. Untagged enums absorb
//! both shapes so one odd event never fails a transition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one backend-side analysis unit. Metrics and remediation
/// payloads each carry the sample they describe.
pub type SampleId = u64;

/// Success rate as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuccessRate {
    Ratio(f64),
    Text(String),
}

impl Default for SuccessRate {
    fn default() -> Self {
        SuccessRate::Text("0%".to_string())
    }
}

/// Aggregate run statistics. Replaced wholesale on every `stats` event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsReport {
    #[serde(default)]
    pub total_samples: u64,
    #[serde(default)]
    pub failures: u64,
    #[serde(default)]
    pub success_rate: SuccessRate,
}

/// A single metric value, numeric or preformatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(n) => write!(f, "{}", n),
            Reading::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Per-sample resource metrics. Replaced wholesale on every `metrics` event.
///
/// Every field is optional: a partial payload degrades to absent values
/// instead of rejecting the event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub cpu_usage: Option<Reading>,
    #[serde(default)]
    pub memory_usage: Option<Reading>,
    #[serde(default)]
    pub container_restarts_avg: Option<Reading>,
}
