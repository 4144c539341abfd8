//! Tests for amount parsing and display

use core_kernel::amount::{format_amount, parse_lenient, parse_non_negative, parse_strict, AmountError};
use core_kernel::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod parsing {
    use super::*;

    #[test]
    fn test_decimal_point_and_comma_agree() {
        assert_eq!(parse_strict("1234.56").unwrap(), parse_strict("1234,56").unwrap());
    }

    #[test]
    fn test_negative_values_parse() {
        assert_eq!(parse_strict("-12.5").unwrap(), dec!(-12.5));
    }

    #[test]
    fn test_lenient_blank_is_zero() {
        assert_eq!(parse_lenient("   "), Decimal::ZERO);
    }

    #[test]
    fn test_lenient_garbage_is_zero() {
        assert_eq!(parse_lenient("twelve"), Decimal::ZERO);
        assert_eq!(parse_lenient("€12"), Decimal::ZERO);
    }

    #[test]
    fn test_lenient_keeps_leading_number() {
        assert_eq!(parse_lenient("1.2.3"), dec!(1.2));
        assert_eq!(parse_lenient("850 paid"), dec!(850));
    }

    #[test]
    fn test_non_negative_reads_leading_number() {
        assert_eq!(parse_non_negative("40abc").unwrap(), dec!(40));
        assert!(matches!(parse_non_negative("-3 late"), Err(AmountError::Negative(_))));
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        assert!(matches!(parse_non_negative("-0.01"), Err(AmountError::Negative(_))));
    }

    #[test]
    fn test_non_negative_accepts_negative_zero() {
        assert_eq!(parse_non_negative("-0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_non_negative_garbage_is_zero() {
        assert_eq!(parse_non_negative("abc").unwrap(), Decimal::ZERO);
    }
}

mod display {
    use super::*;

    #[test]
    fn test_two_places() {
        assert_eq!(format_amount(dec!(800)), "800.00");
        assert_eq!(format_amount(dec!(0.5)), "0.50");
    }

    #[test]
    fn test_rounds_extra_places() {
        assert_eq!(format_amount(dec!(10.005)), "10.00");
        assert_eq!(format_amount(dec!(10.015)), "10.02");
    }

    #[test]
    fn test_currency_code_and_symbol() {
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::default(), Currency::EUR);
        assert_eq!(Currency::USD.to_string(), "USD");
    }
}
