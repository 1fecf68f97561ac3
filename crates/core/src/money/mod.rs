//! Money display formatting and parsing.
//!
//! One shared implementation of the amount-to-display-string projection
//! used by every table and chart view, plus the inverse parse used when a
//! display string has to be read back into an amount.

mod formatter;

pub use formatter::*;
