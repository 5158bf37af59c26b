//! Typed subscription and command surface over a raw transport.

use std::collections::HashMap;

use serde_json::Value;

use crate::channel::transport::Transport;
use crate::logging::structured::LogContext;
use crate::protocol::event::{Command, EventKind, PushEvent};

type Handler = Box<dyn FnMut(&PushEvent) + Send>;

/// Decodes raw frames into typed events and fans them out to registered
/// handlers, one kind at a time, in arrival order.
///
/// Owned by exactly one [`DashboardClient`](crate::client::DashboardClient);
/// `detach_all` must run on teardown so a remount never sees duplicate
/// handlers.
pub struct ChannelAdapter {
    transport: Box<dyn Transport>,
    handlers: HashMap<EventKind, Vec<Handler>>,
    ctx: LogContext,
}

impl ChannelAdapter {
    pub fn new(transport: Box<dyn Transport>, ctx: LogContext) -> Self {
        log::info!("{} CHANNEL_OPENED endpoint={}", ctx, transport.endpoint());
        Self {
            transport,
            handlers: HashMap::new(),
            ctx,
        }
    }

    /// Register a handler for one event kind. Handlers for the same kind run
    /// in registration order.
    pub fn on(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Send a fire-and-forget command. Failures are logged, never propagated.
    pub fn emit(&mut self, command: Command) {
        if let Err(e) = self.transport.send(command.as_str(), command.payload()) {
            log::warn!("{} EMIT_FAILED command={} error={}", self.ctx, command.as_str(), e);
        } else {
            log::info!("{} COMMAND_EMITTED command={}", self.ctx, command.as_str());
        }
    }

    /// Drain all pending inbound frames, dispatching each to completion
    /// before the next. Returns the number of frames dispatched.
    pub fn pump(&mut self) -> usize {
        let mut dispatched = 0;
        while let Some((kind, payload)) = self.transport.try_recv() {
            self.dispatch(&kind, &payload);
            dispatched += 1;
        }
        dispatched
    }

    /// Dispatch a single raw frame. Unknown kinds are dropped.
    pub fn dispatch(&mut self, kind: &str, payload: &Value) {
        let Some(kind) = EventKind::parse(kind) else {
            log::debug!("{} UNKNOWN_EVENT_KIND kind={}", self.ctx, kind);
            return;
        };

        let event = PushEvent::decode(kind, payload);
        log::debug!("{} EVENT_DISPATCHED kind={}", self.ctx, kind.as_str());

        if let Some(handlers) = self.handlers.get_mut(&kind) {
            for handler in handlers {
                handler(&event);
            }
        }
    }

    /// Unregister every handler registered on this adapter.
    pub fn detach_all(&mut self) {
        let count: usize = self.handlers.values().map(Vec::len).sum();
        log::info!("{} HANDLERS_DETACHED count={}", self.ctx, count);
        self.handlers.clear();
    }

    /// Close the underlying transport.
    pub fn close(&mut self) {
        self.transport.close();
    }
}
