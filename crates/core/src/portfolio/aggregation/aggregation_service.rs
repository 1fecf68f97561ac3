use log::{debug, warn};
use rust_decimal::Decimal;

use crate::portfolio::holdings::Holding;

use super::aggregation_model::{CashTreatment, PortfolioChangeReport, PortfolioTotals};

/// Sums current value and cost basis across `holdings`.
///
/// A holding without a current quote contributes to neither running sum:
/// its cost basis is excluded along with its market value, so the change
/// figure compares like with like. An empty slice yields all-zero totals.
pub fn aggregate_holdings(holdings: &[Holding], cash_treatment: CashTreatment) -> PortfolioTotals {
    let mut total_current_value = Decimal::ZERO;
    let mut total_value_at_purchase = Decimal::ZERO;
    let mut skipped = 0usize;

    for holding in holdings {
        match holding.market_value() {
            Some(market_value) => {
                total_current_value += market_value;
                total_value_at_purchase += holding.cost_basis();
            }
            None => {
                skipped += 1;
                debug!(
                    "No quote for {}; holding excluded from totals",
                    holding.investment.symbol
                );
            }
        }
    }

    if skipped > 0 {
        warn!(
            "{} of {} holdings had no quote and were excluded from portfolio totals",
            skipped,
            holdings.len()
        );
    }

    let total_change_in_value = total_current_value - total_value_at_purchase;

    let cash_balance = match cash_treatment {
        CashTreatment::WithCashBalance => account_cash_balance(holdings),
        CashTreatment::WithoutCashBalance => Decimal::ZERO,
    };

    PortfolioTotals {
        total_current_value: total_current_value + cash_balance,
        total_value_at_purchase,
        total_change_in_value,
        cash_balance,
    }
}

/// Whole-portfolio change report: the three aggregation totals plus the
/// summed per-share price movement, securities-only.
pub fn portfolio_change_report(holdings: &[Holding]) -> PortfolioChangeReport {
    let totals = aggregate_holdings(holdings, CashTreatment::WithoutCashBalance);

    let total_change_in_price: Decimal = holdings
        .iter()
        .filter_map(Holding::change_in_price)
        .sum();

    PortfolioChangeReport {
        total_value_at_purchase: totals.total_value_at_purchase,
        total_change_in_value: totals.total_change_in_value,
        total_current_value: totals.total_current_value,
        total_change_in_price,
    }
}

/// Cash balance of the account the holdings were fetched for.
///
/// The account views hang the balance off the first holding's account
/// record; an absent account or balance counts as zero cash.
fn account_cash_balance(holdings: &[Holding]) -> Decimal {
    holdings
        .first()
        .and_then(|holding| holding.account.as_ref())
        .and_then(|account| account.cash_on_account)
        .unwrap_or(Decimal::ZERO)
}
