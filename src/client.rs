//! The dashboard client session object.
//!
//! One `DashboardClient` is constructed per client lifetime and owns the
//! channel adapter and the session store; components receive it by handle
//! rather than sharing module-level state. Teardown is explicit
//! (`shutdown`), with `Drop` detaching handlers as a backstop so a remount
//! never observes duplicate registrations.

use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::actions;
use crate::actions::LogSink;
use crate::channel::adapter::ChannelAdapter;
use crate::channel::transport::Transport;
use crate::logging;
use crate::logging::structured::LogContext;
use crate::monitor::LifecycleMonitor;
use crate::protocol::event::EventKind;
use crate::store::state::SessionStore;
use crate::store::SharedStore;
use crate::view::snapshot::{project, DashboardSnapshot};

pub struct DashboardClient {
    adapter: ChannelAdapter,
    store: SharedStore,
    ctx: LogContext,
}

impl DashboardClient {
    /// Wire a client over an established transport.
    ///
    /// Registers the lifecycle monitor plus one handler per data event kind,
    /// all forwarding into the store.
    pub fn connect(transport: Box<dyn Transport>) -> Self {
        logging::init_logging();

        let client_id = format!("client-{}", &Uuid::new_v4().to_string()[..8]);
        let ctx = LogContext::new(&client_id);
        log::info!("{} CLIENT_CREATED endpoint={}", ctx, transport.endpoint());

        let store: SharedStore = Arc::new(RwLock::new(SessionStore::new(ctx.clone())));
        let mut adapter = ChannelAdapter::new(transport, ctx.clone());

        LifecycleMonitor::attach(&mut adapter, store.clone());
        for kind in [
            EventKind::Log,
            EventKind::Stats,
            EventKind::Metrics,
            EventKind::Remediation,
        ] {
            let store = store.clone();
            adapter.on(kind, Box::new(move |event| store.write().apply(event)));
        }

        Self {
            adapter,
            store,
            ctx,
        }
    }

    /// Drain and apply all pending push events. Returns how many frames were
    /// processed.
    pub fn poll(&mut self) -> usize {
        self.adapter.pump()
    }

    /// Current immutable view model.
    pub fn snapshot(&self) -> DashboardSnapshot {
        project(&self.store.read())
    }

    /// Guarded start-analysis action. Returns whether a run began.
    pub fn start_analysis(&mut self) -> bool {
        actions::start_analysis(&mut self.store.write(), &mut self.adapter)
    }

    /// Export the accumulated log through the sink. Returns whether an
    /// artifact was produced.
    pub fn download_logs(&self, sink: &mut dyn LogSink) -> bool {
        actions::download_logs(&self.store.read(), sink)
    }

    /// Direct store handle, for embedders that project on their own cadence.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// Explicit teardown: detach all handlers and close the transport.
    pub fn shutdown(mut self) {
        log::info!("{} CLIENT_SHUTDOWN", self.ctx);
        self.adapter.detach_all();
        self.adapter.close();
    }
}

impl Drop for DashboardClient {
    fn drop(&mut self) {
        self.adapter.detach_all();
    }
}
