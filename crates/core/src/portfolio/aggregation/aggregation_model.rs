use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an account's cash balance participates in portfolio totals.
///
/// The account holdings view folds the uninvested cash into the current
/// value it displays; the dashboard totals are securities-only. Downstream
/// displays depend on which was used, so callers pick one explicitly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CashTreatment {
    WithCashBalance,
    WithoutCashBalance,
}

/// Running totals over a sequence of holdings.
///
/// `total_change_in_value` is always securities-only; under
/// [`CashTreatment::WithCashBalance`] the folded balance is reported in
/// `cash_balance` and included in `total_current_value`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_current_value: Decimal,
    pub total_value_at_purchase: Decimal,
    pub total_change_in_value: Decimal,
    pub cash_balance: Decimal,
}

/// Whole-portfolio change figures, the payload behind the dashboard's
/// total-change table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioChangeReport {
    pub total_value_at_purchase: Decimal,
    pub total_change_in_value: Decimal,
    pub total_current_value: Decimal,
    pub total_change_in_price: Decimal,
}
