//! Outbound transport: one WebSocket connection, one text frame per order.
//!
//! The [`OrderSink`] trait is the seam between the dispatch loop and the
//! wire. Production code uses [`WsSink`]; tests use
//! [`mock::RecordingSink`] to capture traffic without a server.

pub mod error;
pub mod mock;
pub mod sink;

pub use error::*;
pub use sink::*;
