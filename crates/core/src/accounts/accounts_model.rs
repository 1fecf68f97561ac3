use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Brokerage account that holdings are positioned in.
///
/// `cash_on_account` is the uninvested balance; one aggregation mode folds
/// it into the portfolio's current value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: Option<i64>,
    pub account_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub cash_on_account: Option<Decimal>,
}
