use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use crate::constants::UNCLASSIFIED_SECTOR;
use crate::portfolio::holdings::{Bucket, Holding};

use super::allocation_model::{BucketRollup, SectorChange, SymbolChange};

/// Sums quoted holdings into per-bucket totals, ordered by bucket.
///
/// Holdings without a bucket fall into [`Bucket::Bucket0`]; holdings
/// without a quote are excluded, the same policy as the portfolio totals.
pub fn bucket_rollup(holdings: &[Holding]) -> Vec<BucketRollup> {
    let mut by_bucket: BTreeMap<Bucket, (Decimal, Decimal)> = BTreeMap::new();

    for holding in holdings {
        let market_value = match holding.market_value() {
            Some(value) => value,
            None => {
                debug!(
                    "No quote for {}; holding excluded from bucket rollup",
                    holding.investment.symbol
                );
                continue;
            }
        };
        let bucket = holding.bucket.unwrap_or(Bucket::Bucket0);
        let entry = by_bucket
            .entry(bucket)
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += market_value;
        entry.1 += holding.cost_basis();
    }

    by_bucket
        .into_iter()
        .map(|(bucket, (amount, amount_at_purchase))| BucketRollup {
            bucket,
            amount,
            amount_at_purchase,
        })
        .collect()
}

/// Groups quoted holdings into the change-by-sector tree: per-sector sums
/// with per-symbol children, both in lexical order.
///
/// Instruments without a sector classification group under
/// [`UNCLASSIFIED_SECTOR`]. Multiple lots of the same symbol merge into
/// one child.
pub fn sector_rollup(holdings: &[Holding]) -> Vec<SectorChange> {
    // sector -> symbol -> (purchase value, market value)
    let mut by_sector: BTreeMap<String, BTreeMap<String, (Decimal, Decimal)>> = BTreeMap::new();

    for holding in holdings {
        let market_value = match holding.market_value() {
            Some(value) => value,
            None => {
                debug!(
                    "No quote for {}; holding excluded from sector rollup",
                    holding.investment.symbol
                );
                continue;
            }
        };
        let sector = holding
            .investment
            .sector
            .clone()
            .unwrap_or_else(|| UNCLASSIFIED_SECTOR.to_string());
        let entry = by_sector
            .entry(sector)
            .or_default()
            .entry(holding.investment.symbol.clone())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += holding.cost_basis();
        entry.1 += market_value;
    }

    by_sector
        .into_iter()
        .map(|(sector, symbols)| {
            let mut purchase_value = Decimal::ZERO;
            let mut market_value = Decimal::ZERO;
            let children: Vec<SymbolChange> = symbols
                .into_iter()
                .map(|(symbol, (purchase, market))| {
                    purchase_value += purchase;
                    market_value += market;
                    SymbolChange {
                        symbol,
                        purchase_value: purchase,
                        market_value: market,
                        change_in_value: market - purchase,
                    }
                })
                .collect();
            SectorChange {
                sector,
                purchase_value,
                market_value,
                change_in_value: market_value - purchase_value,
                children,
            }
        })
        .collect()
}
