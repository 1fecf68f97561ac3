//! Portfoliomgmt Core - Domain models and portfolio calculations.
//!
//! This crate contains the numeric core shared by every portfolio view:
//! money display formatting, per-holding valuation, and portfolio-level
//! aggregation. It performs no I/O and holds no global state; holdings
//! arrive already deserialized from the server API and every operation is
//! a pure function over them, safe to call from any number of rendering
//! contexts at once.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod money;
pub mod portfolio;
pub mod quotes;

// Re-export common types from the money and portfolio modules
pub use money::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
