//! Property-based tests for money display formatting.
//!
//! These verify the formatting invariants over randomly generated amounts,
//! using the `proptest` crate for test case generation.

use portfoliomgmt_core::money::{format_amount, parse_amount, FormatOptions};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Amounts at display scale: an exact number of cents.
fn arb_cents() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Formatting is a pure projection: repeated calls agree.
    #[test]
    fn formatting_is_deterministic(amount in arb_cents()) {
        let options = FormatOptions::default();
        prop_assert_eq!(
            format_amount(amount, &options),
            format_amount(amount, &options)
        );
    }

    /// Exactly the strictly negative amounts take a leading sign.
    #[test]
    fn sign_tracks_strict_negativity(amount in arb_cents()) {
        let display = format_amount(amount, &FormatOptions::default());
        prop_assert_eq!(display.starts_with('-'), amount < Decimal::ZERO);
    }

    /// With zero decimal places a non-negative integer formats as its plain
    /// digit grouping, with no separator point anywhere.
    #[test]
    fn zero_places_is_plain_grouping(n in 0u64..100_000_000_000) {
        let options = FormatOptions::with_decimal_places(0);
        let display = format_amount(Decimal::from(n), &options);
        prop_assert!(!display.contains(options.decimal_separator));
        let ungrouped: String = display
            .chars()
            .filter(|c| *c != options.thousands_separator)
            .collect();
        prop_assert_eq!(ungrouped, n.to_string());
    }

    /// Every digit group after the first is exactly three wide, and the
    /// first is one to three wide.
    #[test]
    fn digit_groups_are_three_wide(amount in arb_cents()) {
        let display = format_amount(amount, &FormatOptions::default());
        let integer_part = display.trim_start_matches('-').split('.').next().unwrap();
        let groups: Vec<&str> = integer_part.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// The fraction is always padded to exactly the configured width.
    #[test]
    fn fraction_is_exactly_two_digits(amount in arb_cents()) {
        let display = format_amount(amount, &FormatOptions::default());
        let fraction = display.split('.').nth(1).unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }

    /// Parsing a formatted amount back and re-formatting reproduces the
    /// display string, and the parsed value equals the original for any
    /// amount representable at display scale.
    #[test]
    fn parse_format_round_trip(amount in arb_cents()) {
        let options = FormatOptions::default();
        let display = format_amount(amount, &options);
        let parsed = parse_amount(&display, &options).unwrap();
        prop_assert_eq!(parsed, amount);
        prop_assert_eq!(format_amount(parsed, &options), display);
    }
}
