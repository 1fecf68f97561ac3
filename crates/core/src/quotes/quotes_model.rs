use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// End-of-day market quote for an investment.
///
/// Only the close is required; the server omits the other figures for
/// sparse historical data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(default)]
    pub quote_id: Option<i64>,
    pub date: NaiveDate,
    pub close: Decimal,
    #[serde(default)]
    pub open: Option<Decimal>,
    #[serde(default)]
    pub high: Option<Decimal>,
    #[serde(default)]
    pub low: Option<Decimal>,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default)]
    pub price_change: Option<Decimal>,
}

impl Quote {
    /// Quote carrying just the figures valuation needs.
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Quote {
            quote_id: None,
            date,
            close,
            open: None,
            high: None,
            low: None,
            volume: None,
            price_change: None,
        }
    }
}
