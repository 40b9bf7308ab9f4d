//! Property-based tests for currency rounding.
//!
//! - Result scale always equals the resolved digit count
//! - Rounding is idempotent
//! - Results land on the increment grid, within one step of the input
//! - Directional modes respect their direction for either sign

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::digits::CurrencyDigits;
use super::mode::RoundingMode;
use super::number::Number;
use super::options::RoundingOptions;
use super::service::CurrencyRounder;

/// Strategy to generate signed amounts with 0 to 6 fraction digits.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to pick currencies with distinct fraction rules.
fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "JPY", "CHF", "DKK", "SEK", "BHD", "CLF", "CAD"])
}

/// Strategy to generate digit-selection policies.
fn currency_digits() -> impl Strategy<Value = CurrencyDigits> {
    prop_oneof![
        Just(CurrencyDigits::Iso),
        Just(CurrencyDigits::Cash),
        (0u32..=6).prop_map(CurrencyDigits::Fixed),
    ]
}

/// Strategy to pick a rounding mode.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

fn options(currency: &str, digits: CurrencyDigits, mode: RoundingMode) -> RoundingOptions {
    RoundingOptions::new(currency)
        .with_digits(digits)
        .with_mode(mode)
}

/// The smallest distance between two representable results.
fn step_for(rounder: &CurrencyRounder, options: &RoundingOptions) -> Decimal {
    let precision = rounder.precision_for(options).unwrap();
    Decimal::new(i64::from(precision.increment.max(1)), precision.digits)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The result has exactly the resolved number of fraction digits.
    #[test]
    fn prop_scale_matches_resolved_digits(
        value in amount(),
        currency in currency(),
        digits in currency_digits(),
        mode in rounding_mode(),
    ) {
        let rounder = CurrencyRounder::new();
        let options = options(currency, digits, mode);
        let precision = rounder.precision_for(&options).unwrap();
        let result = rounder.round(value, &options).unwrap();
        prop_assert_eq!(result.scale(), precision.digits, "{} -> {}", value, result);
    }

    /// Rounding an already rounded value changes nothing.
    #[test]
    fn prop_idempotent(
        value in amount(),
        currency in currency(),
        digits in currency_digits(),
        mode in rounding_mode(),
    ) {
        let rounder = CurrencyRounder::new();
        let options = options(currency, digits, mode);
        let once = rounder.round(value, &options).unwrap();
        let twice = rounder.round(once, &options).unwrap();
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once.scale(), twice.scale());
    }

    /// The result is a multiple of the step and less than one step away.
    /// Half modes stay within half a step.
    #[test]
    fn prop_on_grid_and_close(
        value in amount(),
        currency in currency(),
        digits in currency_digits(),
        mode in rounding_mode(),
    ) {
        let rounder = CurrencyRounder::new();
        let options = options(currency, digits, mode);
        let step = step_for(&rounder, &options);
        let result = rounder.round(value, &options).unwrap();

        prop_assert!((result % step).is_zero(), "{} is not a multiple of {}", result, step);

        let distance = (result - value).abs();
        match mode {
            RoundingMode::HalfUp | RoundingMode::HalfEven | RoundingMode::HalfDown => {
                prop_assert!(distance * Decimal::TWO <= step);
            }
            _ => prop_assert!(distance < step),
        }
    }

    /// Directional modes move the value the way they promise.
    #[test]
    fn prop_directional_modes(
        value in amount(),
        currency in currency(),
        digits in currency_digits(),
    ) {
        let rounder = CurrencyRounder::new();
        let round = |mode| rounder.round(value, &options(currency, digits, mode)).unwrap();

        prop_assert!(round(RoundingMode::Floor) <= value);
        prop_assert!(round(RoundingMode::Ceiling) >= value);
        prop_assert!(round(RoundingMode::Down).abs() <= value.abs());
        prop_assert!(round(RoundingMode::Up).abs() >= value.abs());
    }

    /// Sign-symmetric modes commute with negation; Floor and Ceiling swap.
    #[test]
    fn prop_negation(
        value in amount(),
        currency in currency(),
        digits in currency_digits(),
    ) {
        let rounder = CurrencyRounder::new();
        let round = |v: Decimal, mode| rounder.round(v, &options(currency, digits, mode)).unwrap();

        for mode in [
            RoundingMode::HalfUp,
            RoundingMode::HalfEven,
            RoundingMode::HalfDown,
            RoundingMode::Up,
            RoundingMode::Down,
        ] {
            prop_assert_eq!(round(-value, mode), -round(value, mode));
        }
        prop_assert_eq!(round(-value, RoundingMode::Ceiling), -round(value, RoundingMode::Floor));
    }

    /// Batch rounding gives the same answers as one call per value.
    #[test]
    fn prop_batch_matches_sequential(
        values in prop::collection::vec(amount(), 0..32),
        currency in currency(),
        digits in currency_digits(),
        mode in rounding_mode(),
    ) {
        let rounder = CurrencyRounder::new();
        let options = options(currency, digits, mode);
        let numbers: Vec<Number> = values.iter().copied().map(Number::from).collect();

        let batch = rounder.round_many(&numbers, &options);
        let sequential: Vec<_> = values.iter().map(|v| rounder.round(*v, &options)).collect();
        prop_assert_eq!(batch, sequential);
    }
}
