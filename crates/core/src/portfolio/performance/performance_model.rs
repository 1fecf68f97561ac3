use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the performance series: summed market value on a quote
/// date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RollupPoint {
    pub quote_date: NaiveDate,
    pub market_value: Decimal,
}

/// Which holdings participate in a performance series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolFilter {
    /// Every holding in the portfolio.
    All,
    /// Holdings of a single investment symbol.
    Symbol(String),
}

impl SymbolFilter {
    /// Parses the selector the views send: `"all"` in any case selects the
    /// whole portfolio, anything else a single symbol.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            SymbolFilter::All
        } else {
            SymbolFilter::Symbol(value.to_string())
        }
    }

    /// Whether a holding with this symbol is selected.
    pub fn matches(&self, symbol: &str) -> bool {
        match self {
            SymbolFilter::All => true,
            SymbolFilter::Symbol(selected) => selected.eq_ignore_ascii_case(symbol),
        }
    }
}
