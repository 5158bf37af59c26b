//! User-triggerable actions.
//!
//! Start-analysis and log export. Guards live here, at the boundary: the
//! store itself stays unguarded and the action surface is safe to invoke
//! even when the UI failed to disable it.

pub mod controller;

pub use controller::*;
