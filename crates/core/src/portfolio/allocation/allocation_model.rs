use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::Bucket;

/// Summed value per bucket, for the bucket-strategy view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BucketRollup {
    pub bucket: Bucket,
    /// Current market value of the bucket's quoted holdings.
    pub amount: Decimal,
    pub amount_at_purchase: Decimal,
}

/// Per-symbol change figures, the leaves of the sector tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolChange {
    pub symbol: String,
    pub purchase_value: Decimal,
    pub market_value: Decimal,
    pub change_in_value: Decimal,
}

/// Change in value grouped by sector, with per-symbol children.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorChange {
    pub sector: String,
    pub purchase_value: Decimal,
    pub market_value: Decimal,
    pub change_in_value: Decimal,
    pub children: Vec<SymbolChange>,
}
