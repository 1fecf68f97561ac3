//! Brokerage account model.

mod accounts_model;

pub use accounts_model::*;
