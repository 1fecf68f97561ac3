use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::quotes::Quote;

/// Bucket-strategy classification for a holding: which drawdown horizon
/// the position is earmarked for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    #[serde(rename = "BUCKET_0")]
    Bucket0,
    #[serde(rename = "BUCKET_1")]
    Bucket1,
    #[serde(rename = "BUCKET_2")]
    Bucket2,
    #[serde(rename = "BUCKET_3")]
    Bucket3,
}

impl Bucket {
    /// Human description shown by the bucket views.
    pub fn description(&self) -> &'static str {
        match self {
            Bucket::Bucket0 => "excluded",
            Bucket::Bucket1 => "0 - 3 years",
            Bucket::Bucket2 => "3 - 10 years",
            Bucket::Bucket3 => "Beyond 10 years",
        }
    }
}

/// Instrument data needed for display and grouping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(default)]
    pub investment_id: Option<i64>,
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub investment_type: Option<String>,
    #[serde(default)]
    pub expense_ratio: Option<Decimal>,
}

/// A position in an investment within an account.
///
/// `quotes` holds the market history the server attached, most recent
/// first. `value_at_purchase` and `current_value` are the server-computed
/// figures when present; the accessor methods recompute them from quantity
/// and prices otherwise, so a partially populated record still values
/// correctly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[serde(default)]
    pub holding_id: Option<i64>,
    pub investment: Investment,
    #[serde(default)]
    pub account: Option<Account>,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, rename = "bucketEnum")]
    pub bucket: Option<Bucket>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub value_at_purchase: Option<Decimal>,
    #[serde(default)]
    pub current_value: Option<Decimal>,
}

impl Holding {
    /// The most recent quote the server attached, if any.
    pub fn most_recent_quote(&self) -> Option<&Quote> {
        self.quotes.first()
    }

    /// Whether a current market valuation exists for this holding.
    pub fn has_quote(&self) -> bool {
        self.current_value.is_some() || !self.quotes.is_empty()
    }

    /// Cost basis of the position: `quantity * purchase_price`, unless the
    /// server already sent the figure.
    pub fn cost_basis(&self) -> Decimal {
        self.value_at_purchase
            .unwrap_or_else(|| self.quantity * self.purchase_price)
    }

    /// Current market value: `quantity * close` of the most recent quote.
    ///
    /// `None` when no quote is available. Callers must treat that as an
    /// absent value, never as zero.
    pub fn market_value(&self) -> Option<Decimal> {
        self.current_value
            .or_else(|| self.most_recent_quote().map(|quote| self.quantity * quote.close))
    }

    /// Gain or loss since purchase, `None` without a quote.
    pub fn change_in_value(&self) -> Option<Decimal> {
        self.market_value().map(|value| value - self.cost_basis())
    }

    /// Per-share price movement since purchase, `None` without a quote.
    pub fn change_in_price(&self) -> Option<Decimal> {
        self.most_recent_quote()
            .map(|quote| quote.close - self.purchase_price)
    }
}
