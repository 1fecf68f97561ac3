//! Portfolio performance over time: the date-ordered market-value series
//! the performance chart draws.

mod performance_model;
mod performance_service;

pub use performance_model::*;
pub use performance_service::*;
