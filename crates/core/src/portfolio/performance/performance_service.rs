use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::portfolio::holdings::Holding;

use super::performance_model::{RollupPoint, SymbolFilter};

/// Builds the date-ordered market-value series for the selected holdings.
///
/// Every quote contributes `quantity * close` on its quote date; a holding
/// only shows up on dates it has a quote for, and dates with no quotes at
/// all do not appear. `window_days` keeps only dates within that many days
/// of the newest quote in the selected data.
pub fn performance_series(
    holdings: &[Holding],
    filter: &SymbolFilter,
    window_days: Option<u32>,
) -> Vec<RollupPoint> {
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for holding in holdings {
        if !filter.matches(&holding.investment.symbol) {
            continue;
        }
        for quote in &holding.quotes {
            *by_date.entry(quote.date).or_insert(Decimal::ZERO) +=
                holding.quantity * quote.close;
        }
    }

    let min_date = window_days.and_then(|days| {
        by_date
            .keys()
            .next_back()
            .map(|latest| *latest - Duration::days(i64::from(days)))
    });

    by_date
        .into_iter()
        .filter(|(date, _)| min_date.map_or(true, |min| *date >= min))
        .map(|(quote_date, market_value)| RollupPoint {
            quote_date,
            market_value,
        })
        .collect()
}
