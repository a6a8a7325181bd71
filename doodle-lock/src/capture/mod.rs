//! Captured pen input
//!
//! Plain data handed over by the drawing surface once a gesture is complete.
//! Nothing here touches the screen or storage.

pub mod types;

pub use types::*;
