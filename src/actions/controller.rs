//! Start-analysis and log-export actions.

use crate::channel::adapter::ChannelAdapter;
use crate::protocol::event::Command;
use crate::store::state::{ConnectionState, SessionStore};

/// Filename handed to the sink for log exports.
pub const LOG_EXPORT_FILENAME: &str = "k8s_remediation_logs.txt";

/// Receives exported artifacts. The actual file-save mechanism belongs to
/// the rendering layer.
pub trait LogSink {
    fn save(&mut self, filename: &str, contents: &str);
}

/// Begin a new analysis run.
///
/// Guarded: requires a connected channel and no run in progress. When the
/// guard fails this is a silent no-op (the UI disables the button, but the
/// action must be safe anyway). Returns whether the run was started.
pub fn start_analysis(store: &mut SessionStore, adapter: &mut ChannelAdapter) -> bool {
    if store.connection() != ConnectionState::Connected {
        log::debug!("START_ANALYSIS_REFUSED reason=disconnected");
        return false;
    }
    if store.is_running() {
        log::debug!("START_ANALYSIS_REFUSED reason=already_running");
        return false;
    }

    store.start_session();
    adapter.emit(Command::StartAnalysis);
    true
}

/// Export the accumulated log as a newline-joined text blob.
///
/// No header, no footer, no escaping. No-op when the log is empty: the sink
/// is never invoked. Returns whether an artifact was produced.
pub fn download_logs(store: &SessionStore, sink: &mut dyn LogSink) -> bool {
    if store.logs().is_empty() {
        return false;
    }

    let contents = store
        .logs()
        .iter()
        .map(|l| l.message.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    sink.save(LOG_EXPORT_FILENAME, &contents);
    true
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::channel::transport::InMemoryTransport;
    use crate::logging::structured::LogContext;

    struct RecordingSink {
        saved: Vec<(String, String)>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self { saved: Vec::new() }
        }
    }

    impl LogSink for RecordingSink {
        fn save(&mut self, filename: &str, contents: &str) {
            self.saved.push((filename.to_string(), contents.to_string()));
        }
    }

    fn store() -> SessionStore {
        SessionStore::new(LogContext::new("test-client"))
    }

    fn adapter() -> ChannelAdapter {
        ChannelAdapter::new(
            Box::new(InMemoryTransport::new("mem://test")),
            LogContext::new("test-client"),
        )
    }

    #[test]
    fn test_start_analysis_refused_while_disconnected() {
        let t = InMemoryTransport::new("mem://test");
        let sent = t.sent_frames();
        let mut s = store();
        let mut a = ChannelAdapter::new(Box::new(t), LogContext::new("test-client"));
        s.on_log("pre-existing");

        assert!(!start_analysis(&mut s, &mut a));
        // No mutation, no command: the log survives and nothing was sent.
        assert_eq!(s.logs().len(), 1);
        assert!(!s.is_running());
        assert!(sent.lock().is_empty());
    }

    #[test]
    fn test_start_analysis_refused_while_running() {
        let mut s = store();
        let mut a = adapter();
        s.on_connect();
        assert!(start_analysis(&mut s, &mut a));
        assert!(!start_analysis(&mut s, &mut a));
    }

    #[test]
    fn test_start_analysis_clears_and_emits() {
        let mut s = store();
        let mut a = adapter();
        s.on_connect();
        s.on_log("old");

        assert!(start_analysis(&mut s, &mut a));
        assert!(s.is_running());
        assert!(s.logs().is_empty());
    }

    #[test]
    fn test_download_logs_empty_is_noop() {
        let s = store();
        let mut sink = RecordingSink::new();
        assert!(!download_logs(&s, &mut sink));
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn test_download_logs_joins_lines() {
        let mut s = store();
        s.on_log("line one");
        s.on_log("line two");

        let mut sink = RecordingSink::new();
        assert!(download_logs(&s, &mut sink));
        assert_eq!(
            sink.saved,
            vec![(
                LOG_EXPORT_FILENAME.to_string(),
                "line one\nline two".to_string()
            )]
        );
    }

    #[test]
    fn test_emit_accompanies_successful_start() {
        let t = InMemoryTransport::new("mem://test");
        let sent = t.sent_frames();
        let mut s = store();
        s.on_connect();

        let mut a = ChannelAdapter::new(Box::new(t), LogContext::new("test-client"));
        assert!(start_analysis(&mut s, &mut a));

        let frames = sent.lock();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].0, "start_analysis");
        assert_eq!(frames[0].1, json!(null));
    }
}
