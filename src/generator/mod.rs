//! Randomized order synthesis.
//!
//! This is the heart of the load generator: a table-driven menu
//! vocabulary ([`menu`]), a small name pool ([`names`]), and the
//! [`OrderGenerator`] that assembles complete [`Order`](crate::model::Order)
//! records from them.

pub mod menu;
pub mod names;
pub mod orders;

pub use orders::*;
