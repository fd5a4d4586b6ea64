//! # Order Load Generator
//!
//! > **Synthetic order traffic for exercising a WebSocket order consumer.**
//!
//! This crate connects to a WebSocket endpoint and streams randomly
//! generated food orders as JSON text frames, either on a randomized
//! timer or on operator keystrokes. It exists to put plausible-looking
//! load on a downstream order-consuming service during development and
//! testing; it is deliberately fire-and-forget (no acks, no retries, no
//! reconnection).
//!
//! ## Concurrency Model
//!
//! Two Tokio tasks cooperate through one bounded control channel:
//!
//! - The **dispatch loop** ([`dispatch`]) owns the connection and is the
//!   only writer. Each iteration it drains pending operator commands
//!   without blocking, then either sends an order and sleeps a random
//!   3–8 s (auto mode) or naps 500 ms (waiting mode).
//! - The **input listener** ([`input`]) blocks on stdin and maps single
//!   keys to commands: `s` send one, `a` toggle auto-generation, `q`
//!   quit. It never touches the socket.
//!
//! Routing every send through the dispatch task means an operator
//! triggered send and an auto tick can never race on the connection.
//!
//! ## Module Tour
//!
//! - [`model`]: the wire payload (`Order`, `OrderItem`, `ItemProperty`).
//! - [`generator`]: table-driven random order synthesis.
//! - [`dispatch`]: the state machine and send loop.
//! - [`input`]: console prompt and keystroke listener.
//! - [`transport`]: the `OrderSink` seam, live WebSocket sink, and a
//!   recording mock for tests.
//! - [`runtime`]: tracing setup and the `LoadSystem` orchestrator.
//! - [`config`]: endpoint default and runtime knobs.
//!
//! ## Running
//!
//! ```bash
//! # Default endpoint, info logs
//! RUST_LOG=info cargo run
//!
//! # Point at another consumer
//! RUST_LOG=debug cargo run -- ws://localhost:9001/orders
//! ```

pub mod config;
pub mod dispatch;
pub mod generator;
pub mod input;
pub mod model;
pub mod runtime;
pub mod transport;
