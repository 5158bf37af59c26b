//! Structured logging with client context.
//!
//! Provides a context prefix carrying the client id and, once an analysis
//! run is active, the session id, so every log line from one run correlates.

pub mod structured;

pub use structured::*;

/// Initialize the module-level logger. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
