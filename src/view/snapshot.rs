//! Immutable dashboard snapshots.

use crate::protocol::model::{MetricsSnapshot, SampleId, StatsReport, SuccessRate};
use crate::store::log_line::LogLine;
use crate::store::state::{ConnectionState, SessionStore};

/// Presentation-ready view of the current dashboard state.
///
/// Built by [`project`]; holds owned copies so the rendering layer can keep
/// it across frames without pinning the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub connection: ConnectionState,
    pub is_running: bool,
    pub stats: StatsReport,
    pub success_rate_display: String,
    pub metrics: Option<MetricsSnapshot>,
    pub metrics_sample: Option<SampleId>,
    pub remediation: Vec<String>,
    pub remediation_sample: Option<SampleId>,
    pub logs: Vec<LogLine>,
}

/// Derive a snapshot from the store. Performs no mutation.
pub fn project(store: &SessionStore) -> DashboardSnapshot {
    DashboardSnapshot {
        connection: store.connection(),
        is_running: store.is_running(),
        stats: store.stats().clone(),
        success_rate_display: format_success_rate(&store.stats().success_rate),
        metrics: store.metrics().cloned(),
        metrics_sample: store.metrics_sample(),
        remediation: store.remediation().to_vec(),
        remediation_sample: store.remediation_sample(),
        logs: store.logs().to_vec(),
    }
}

impl DashboardSnapshot {
    /// Log stream as a single newline-joined blob, the export format.
    pub fn logs_as_text(&self) -> String {
        self.logs
            .iter()
            .map(|l| l.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format a numeric success rate as a two-decimal percentage. Non-numeric
/// values pass through unchanged rather than erroring on unexpected shape.
pub fn format_success_rate(rate: &SuccessRate) -> String {
    match rate {
        SuccessRate::Ratio(n) => format!("{:.2}%", n),
        SuccessRate::Text(s) => s.clone(),
    }
}
