//! Remedash Core - Reconciliation core for the Kubernetes auto-remediation
//! dashboard client.
//!
//! Consumes asynchronous push events from the remote analysis backend and
//! folds them into a single consistent view model. The design priorities:
//!
//! 1. **Resilience** - one malformed event never takes the dashboard down
//! 2. **Logging** - every transition and decision point logged with context
//! 3. **Single writer** - the store is the sole mutator of dashboard state
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `protocol` - typed wire model for push events and commands
//! - `channel` - transport seam and typed event subscription/emit surface
//! - `store` - the reconciliation core, one transition per event kind
//! - `view` - immutable snapshot projection for the rendering layer
//! - `actions` - guarded start-analysis and log-export actions
//! - `monitor` - connection lifecycle forwarding
//! - `client` - the owned per-lifetime session object wiring it together
//! - `chat` - the stateless chat call (fallback-only error handling)
//! - `logging` - structured logging with client/session context
//!
//! Rendering, transport internals, and the analysis backend are external
//! collaborators. Dispatch is single-threaded and cooperative: each event
//! handler runs to completion before the next frame is pulled.

pub mod actions;
pub mod channel;
pub mod chat;
pub mod client;
pub mod config;
pub mod logging;
pub mod monitor;
pub mod protocol;
pub mod store;
pub mod view;

pub use actions::{LogSink, LOG_EXPORT_FILENAME};
pub use channel::{ChannelAdapter, InMemoryTransport, Transport, TransportError};
pub use chat::{ChatBackend, ChatClient};
pub use client::DashboardClient;
pub use config::Config;
pub use protocol::{Command, EventKind, PushEvent};
pub use store::{ConnectionState, SessionStore, SharedStore};
pub use view::{project, DashboardSnapshot};
