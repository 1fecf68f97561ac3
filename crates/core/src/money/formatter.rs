use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CURRENCY_SYMBOL, DEFAULT_DECIMAL_SEPARATOR, DEFAULT_THOUSANDS_SEPARATOR,
    DISPLAY_DECIMAL_PRECISION, MAX_DECIMAL_SCALE,
};
use crate::errors::Result;

/// Punctuation and precision for a formatted amount.
///
/// The defaults produce the US display convention used throughout the
/// application: two fractional digits, `.` before them, `,` between digit
/// groups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub decimal_places: u32,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            decimal_places: DISPLAY_DECIMAL_PRECISION,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
        }
    }
}

impl FormatOptions {
    /// Options with a given precision and the default separators.
    pub fn with_decimal_places(decimal_places: u32) -> Self {
        FormatOptions {
            decimal_places,
            ..FormatOptions::default()
        }
    }
}

/// Formats an amount as a grouped, fixed-precision display string.
///
/// The fractional part is rounded half-away-from-zero to
/// `options.decimal_places` digits and zero-padded to exactly that width;
/// with zero places no separator point is emitted. Digit groups of three
/// are split by `options.thousands_separator`, counted from the right, and
/// a leftmost group shorter than three digits takes no separator.
///
/// The sign is decided on the raw input: strictly negative amounts are
/// prefixed with `-` even when they round to zero, so `-0.004` renders as
/// `"-0.00"`. Zero and positive amounts carry no sign.
pub fn format_amount(amount: Decimal, options: &FormatOptions) -> String {
    let places = options.decimal_places.min(MAX_DECIMAL_SCALE);
    let negative = amount < Decimal::ZERO;

    let rounded = amount
        .abs()
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);

    // Fixed-point rendering; the value is already at the target scale, so
    // the precision specifier only pads the fraction with zeros.
    let fixed = format!("{:.*}", places as usize, rounded);
    let (int_digits, frac_digits) = match fixed.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, frac_digits),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    push_grouped(&mut out, int_digits, options.thousands_separator);
    if places > 0 {
        out.push(options.decimal_separator);
        out.push_str(frac_digits);
    }
    out
}

/// Formats a binary floating-point amount, the representation the server
/// API serves monetary values in.
///
/// This surface never fails: NaN, infinite, or otherwise unrepresentable
/// input degrades to zero, matching the permissive contract of the views
/// that consume it.
pub fn format_f64(amount: f64, options: &FormatOptions) -> String {
    let value = if amount.is_finite() {
        Decimal::from_f64(amount).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    format_amount(value, options)
}

/// Formats an amount with the default options and the `$` prefix every
/// display site uses, e.g. `"$1,234.50"`.
///
/// The prefix precedes the sign, so negative amounts render as `"$-…"`.
pub fn format_usd(amount: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_amount(amount, &FormatOptions::default()))
}

/// Parses a display string produced by [`format_amount`] (or hand-typed in
/// the same convention) back into an amount.
///
/// Currency symbols, whitespace, and thousands separators are stripped; the
/// configured decimal separator is mapped to `.`. Anything left that is not
/// a decimal number is a validation error, never a panic.
pub fn parse_amount(text: &str, options: &FormatOptions) -> Result<Decimal> {
    let mut normalized = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch == options.thousands_separator || ch == CURRENCY_SYMBOL || ch.is_whitespace() {
            continue;
        }
        if ch == options.decimal_separator {
            normalized.push('.');
        } else {
            normalized.push(ch);
        }
    }
    let value = normalized.parse::<Decimal>()?;
    Ok(value)
}

/// Appends `digits` to `out`, inserting `separator` every three digits
/// counted from the right.
fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}
