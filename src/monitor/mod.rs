//! Connection lifecycle monitor.
//!
//! Bridges transport connect/disconnect callbacks to store transitions. No
//! state of its own; exists so lifecycle handling is testable apart from the
//! adapter wiring.

use crate::channel::adapter::ChannelAdapter;
use crate::protocol::event::{EventKind, PushEvent};
use crate::store::SharedStore;

pub struct LifecycleMonitor;

impl LifecycleMonitor {
    /// Subscribe connect/disconnect on the adapter, forwarding each to the
    /// matching store transition.
    pub fn attach(adapter: &mut ChannelAdapter, store: SharedStore) {
        let connect_store = store.clone();
        adapter.on(
            EventKind::Connect,
            Box::new(move |_| connect_store.write().on_connect()),
        );
        adapter.on(
            EventKind::Disconnect,
            Box::new(move |_| store.write().on_disconnect()),
        );
    }

    /// Forward a single lifecycle event. Non-lifecycle events are ignored.
    pub fn forward(store: &SharedStore, event: &PushEvent) {
        match event {
            PushEvent::Connect => store.write().on_connect(),
            PushEvent::Disconnect => store.write().on_disconnect(),
            _ => {}
        }
    }
}
