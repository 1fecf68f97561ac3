//! Grouped portfolio breakdowns: bucket-strategy totals and the
//! change-by-sector tree.

mod allocation_model;
mod allocation_service;

pub use allocation_model::*;
pub use allocation_service::*;
