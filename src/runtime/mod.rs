//! Runtime orchestration and observability setup.
//!
//! [`LoadSystem`] wires the pieces together (connect the socket, spawn
//! the input listener, run the dispatch loop) and tears them down on
//! exit. [`setup_tracing`] initializes logging once per process.

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
