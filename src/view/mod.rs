//! View model projection.
//!
//! Pure read path from the session store to presentation-ready snapshots.

pub mod snapshot;

pub use snapshot::*;
