//! Wire protocol for the dashboard push channel.
//!
//! Typed models for everything that crosses the transport:
//! - Inbound push events, one variant per event kind
//! - The outbound `start_analysis` command
//! - Payload models (stats, metrics, remediation)

pub mod event;
pub mod model;

pub use event::*;
pub use model::*;
