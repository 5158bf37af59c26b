//! Session state store — the reconciliation core.
//!
//! Sole mutator of dashboard state. Incoming push events are applied as
//! atomic transitions, one per event kind; the projector reads from here and
//! never writes.

use std::sync::Arc;

use parking_lot::RwLock;

pub mod log_line;
pub mod state;

pub use log_line::*;
pub use state::*;

/// Store handle shared between the adapter's handlers and the owning client.
/// All access happens on the dispatch thread; the lock keeps the handle
/// `Send` for embedders that poll from elsewhere.
pub type SharedStore = Arc<RwLock<state::SessionStore>>;
