/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default separator between the integer and fractional parts of a display amount
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';

/// Default digit-grouping separator for display amounts
pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

/// Currency symbol prefixed to display amounts
pub const CURRENCY_SYMBOL: char = '$';

/// Highest fractional scale a `Decimal` can carry; `FormatOptions` clamps to this
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Sector group for instruments without a sector classification
pub const UNCLASSIFIED_SECTOR: &str = "Unclassified";
