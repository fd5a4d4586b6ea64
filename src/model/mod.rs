//! Pure data structures (DTOs) describing the synthetic order payload.

pub mod order;

pub use order::*;
