//! `stockledger-core` — domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod aggregate;
pub mod error;
pub mod value_object;

pub use aggregate::Aggregate;
pub use error::{LedgerError, LedgerResult};
pub use value_object::{ItemName, Quantity};
