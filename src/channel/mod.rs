//! Event channel adapter.
//!
//! Wraps the bidirectional push-event transport behind a typed subscription
//! surface and a fire-and-forget command surface. Retry policy lives in the
//! transport; only state changes surface here.

pub mod adapter;
pub mod transport;

pub use adapter::*;
pub use transport::*;
