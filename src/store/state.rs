//! State transitions for the dashboard view model.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;
use crate::protocol::event::PushEvent;
use crate::protocol::model::{MetricsSnapshot, SampleId, StatsReport};
use crate::store::log_line::{
    LogLine, CONNECTED_MESSAGE, DISCONNECTED_MESSAGE, RUN_COMPLETE_MARKER,
};

/// Transport-level connection state. Written only via the lifecycle
/// transitions below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

/// One user-initiated analysis run.
///
/// The backend never sends an explicit end-of-run event; `is_running` is a
/// UI hint only, flipped off when the run-complete log marker is observed.
/// Nothing in the core keys correctness off it.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    pub is_running: bool,
    pub session_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
}

/// Holds the current view model and applies push events as transitions.
///
/// Transitions execute to completion on the single dispatch thread; the
/// store performs no locking of its own.
#[derive(Debug)]
pub struct SessionStore {
    connection: ConnectionState,
    session: AnalysisSession,
    logs: Vec<LogLine>,
    stats: StatsReport,
    metrics: Option<MetricsSnapshot>,
    metrics_sample: Option<SampleId>,
    remediation: Vec<String>,
    remediation_sample: Option<SampleId>,
    ctx: LogContext,
}

impl SessionStore {
    pub fn new(ctx: LogContext) -> Self {
        Self {
            connection: ConnectionState::Disconnected,
            session: AnalysisSession::default(),
            logs: Vec::new(),
            stats: StatsReport::default(),
            metrics: None,
            metrics_sample: None,
            remediation: Vec::new(),
            remediation_sample: None,
            ctx,
        }
    }

    /// Apply one push event. Exhaustive over event kinds.
    pub fn apply(&mut self, event: &PushEvent) {
        match event {
            PushEvent::Connect => self.on_connect(),
            PushEvent::Disconnect => self.on_disconnect(),
            PushEvent::Log { message } => self.on_log(message),
            PushEvent::Stats(report) => self.on_stats(report.clone()),
            PushEvent::Metrics { metrics, sample } => self.on_metrics(metrics.clone(), *sample),
            PushEvent::Remediation { steps, sample } => {
                self.on_remediation(steps.clone(), *sample)
            }
        }
    }

    pub fn on_log(&mut self, message: &str) {
        if self.session.is_running && message.contains(RUN_COMPLETE_MARKER) {
            log::info!("{} RUN_COMPLETE_HINT", self.ctx);
            self.session.is_running = false;
        }
        self.logs.push(LogLine::new(message));
    }

    pub fn on_stats(&mut self, report: StatsReport) {
        log::debug!(
            "{} STATS_REPLACED total={} failures={}",
            self.ctx,
            report.total_samples,
            report.failures
        );
        self.stats = report;
    }

    pub fn on_metrics(&mut self, metrics: MetricsSnapshot, sample: Option<SampleId>) {
        log::debug!("{} METRICS_REPLACED sample={:?}", self.ctx, sample);
        self.metrics = Some(metrics);
        self.metrics_sample = sample;
    }

    pub fn on_remediation(&mut self, steps: Vec<String>, sample: Option<SampleId>) {
        log::debug!(
            "{} REMEDIATION_REPLACED steps={} sample={:?}",
            self.ctx,
            steps.len(),
            sample
        );
        self.remediation = steps;
        self.remediation_sample = sample;
    }

    pub fn on_connect(&mut self) {
        log::info!("{} CHANNEL_CONNECTED", self.ctx);
        self.connection = ConnectionState::Connected;
        self.logs.push(LogLine::new(CONNECTED_MESSAGE));
    }

    pub fn on_disconnect(&mut self) {
        log::info!("{} CHANNEL_DISCONNECTED", self.ctx);
        self.connection = ConnectionState::Disconnected;
        self.logs.push(LogLine::new(DISCONNECTED_MESSAGE));
    }

    /// Begin a new analysis run. The only operation that clears history.
    ///
    /// Stats are left in place; the backend replaces them wholesale when the
    /// new run reports. Preconditions (connected, not already running) are
    /// guarded at the action boundary, not here.
    pub fn start_session(&mut self) {
        let session_id = format!("session-{}", &Uuid::new_v4().to_string()[..8]);
        self.ctx = self.ctx.with_session(&session_id);

        log::info!("{} SESSION_STARTED cleared_logs={}", self.ctx, self.logs.len());

        self.session = AnalysisSession {
            is_running: true,
            session_id: Some(session_id),
            started_at: Some(Utc::now()),
        };
        self.logs.clear();
        self.remediation.clear();
        self.remediation_sample = None;
        self.metrics = None;
        self.metrics_sample = None;
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    pub fn stats(&self) -> &StatsReport {
        &self.stats
    }

    pub fn metrics(&self) -> Option<&MetricsSnapshot> {
        self.metrics.as_ref()
    }

    pub fn metrics_sample(&self) -> Option<SampleId> {
        self.metrics_sample
    }

    pub fn remediation(&self) -> &[String] {
        &self.remediation
    }

    pub fn remediation_sample(&self) -> Option<SampleId> {
        self.remediation_sample
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::protocol::model::{Reading, SuccessRate};
    use crate::store::log_line::Severity;

    fn store() -> SessionStore {
        SessionStore::new(LogContext::new("test-client"))
    }

    #[test]
    fn test_logs_append_in_arrival_order() {
        let mut s = store();
        s.on_log("A");
        s.on_log("B");
        s.on_log("A");
        let messages: Vec<&str> = s.logs().iter().map(|l| l.message.as_str()).collect();
        assert_eq!(messages, ["A", "B", "A"]);
    }

    #[test]
    fn test_connect_then_disconnect_leaves_two_synthetic_lines() {
        let mut s = store();
        s.on_connect();
        s.on_disconnect();
        assert_eq!(s.connection(), ConnectionState::Disconnected);
        assert_eq!(s.logs().len(), 2);
        assert_eq!(s.logs()[0].message, CONNECTED_MESSAGE);
        assert_eq!(s.logs()[1].message, DISCONNECTED_MESSAGE);
        assert_eq!(s.logs()[1].severity, Severity::Error);
    }

    #[test]
    fn test_stats_last_write_wins() {
        let mut s = store();
        s.on_stats(StatsReport {
            total_samples: 5,
            failures: 1,
            success_rate: SuccessRate::Ratio(80.0),
        });
        s.on_stats(StatsReport {
            total_samples: 9,
            failures: 0,
            success_rate: SuccessRate::Text("100%".to_string()),
        });
        assert_eq!(s.stats().total_samples, 9);
        assert_eq!(s.stats().failures, 0);
        assert_eq!(s.stats().success_rate, SuccessRate::Text("100%".to_string()));
    }

    #[test]
    fn test_metrics_replace_wholesale_with_sample() {
        let mut s = store();
        s.on_metrics(
            MetricsSnapshot {
                cpu_usage: Some(Reading::Number(0.9)),
                memory_usage: Some(Reading::Number(0.5)),
                container_restarts_avg: None,
            },
            Some(1),
        );
        // Second event omits memory_usage entirely; no field merging.
        s.on_metrics(
            MetricsSnapshot {
                cpu_usage: Some(Reading::Number(0.2)),
                memory_usage: None,
                container_restarts_avg: None,
            },
            Some(2),
        );
        let m = s.metrics().unwrap();
        assert_eq!(m.cpu_usage, Some(Reading::Number(0.2)));
        assert_eq!(m.memory_usage, None);
        assert_eq!(s.metrics_sample(), Some(2));
    }

    #[test]
    fn test_metrics_and_remediation_samples_may_diverge() {
        let mut s = store();
        s.on_metrics(MetricsSnapshot::default(), Some(4));
        s.on_remediation(vec!["Restart pod".to_string()], Some(3));
        assert_eq!(s.metrics_sample(), Some(4));
        assert_eq!(s.remediation_sample(), Some(3));
    }

    #[test]
    fn test_start_session_clears_history() {
        let mut s = store();
        s.on_connect();
        s.on_log("old line");
        s.on_metrics(MetricsSnapshot::default(), Some(7));
        s.on_remediation(vec!["step".to_string()], Some(7));
        s.on_stats(StatsReport {
            total_samples: 3,
            failures: 2,
            success_rate: SuccessRate::Ratio(33.3),
        });

        s.start_session();

        assert!(s.is_running());
        assert!(s.logs().is_empty());
        assert!(s.remediation().is_empty());
        assert!(s.metrics().is_none());
        assert_eq!(s.metrics_sample(), None);
        assert_eq!(s.remediation_sample(), None);
        // Stats survive until the new run replaces them.
        assert_eq!(s.stats().total_samples, 3);
        // Connection state is not a per-session value.
        assert_eq!(s.connection(), ConnectionState::Connected);
        assert!(s.session().session_id.is_some());
        assert!(s.session().started_at.is_some());
    }

    #[test]
    fn test_start_session_twice_clears_interleaved_events() {
        let mut s = store();
        s.on_connect();
        s.start_session();
        s.on_log("from run one");
        s.on_remediation(vec!["stale step".to_string()], Some(1));
        s.start_session();
        assert!(s.logs().is_empty());
        assert!(s.remediation().is_empty());
        assert!(s.is_running());
    }

    #[test]
    fn test_run_complete_marker_flips_running_hint() {
        let mut s = store();
        s.start_session();
        assert!(s.is_running());
        s.on_log("🏁 Analysis complete!");
        assert!(!s.is_running());
        // The line itself still lands in the log stream.
        assert_eq!(s.logs().len(), 1);
    }

    #[test]
    fn test_late_events_apply_to_current_session() {
        // No session-affinity filtering: a stale-run event mutates current
        // state exactly like a live one.
        let mut s = store();
        s.start_session();
        s.on_remediation(vec!["late step from run one".to_string()], Some(9));
        s.start_session();
        s.on_remediation(vec!["left over".to_string()], Some(9));
        assert_eq!(s.remediation(), ["left over".to_string()]);
    }

    proptest! {
        #[test]
        fn prop_log_sequence_equals_arrival_order(messages in proptest::collection::vec(".*", 0..32)) {
            let mut s = store();
            for m in &messages {
                s.on_log(m);
            }
            prop_assert_eq!(s.logs().len(), messages.len());
            for (line, message) in s.logs().iter().zip(&messages) {
                prop_assert_eq!(&line.message, message);
            }
        }

        #[test]
        fn prop_stats_last_write_wins(totals in proptest::collection::vec(0u64..10_000, 1..16)) {
            let mut s = store();
            for t in &totals {
                s.on_stats(StatsReport { total_samples: *t, failures: 0, success_rate: SuccessRate::Ratio(0.0) });
            }
            prop_assert_eq!(s.stats().total_samples, *totals.last().unwrap());
        }
    }
}
