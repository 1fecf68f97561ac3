//! Portfolio-level totals over a sequence of holdings.
//!
//! Two views render these figures with different cash handling; the mode
//! is an explicit argument here rather than an implicit choice per caller.

mod aggregation_model;
mod aggregation_service;

pub use aggregation_model::*;
pub use aggregation_service::*;
