//! Validation tests for crcgen inputs
//!
//! Covers the three failure classes checked before any matrix is built:
//! - range errors (widths outside the ceiling)
//! - format errors (short or non-hex polynomial strings, bad expressions)
//! - configuration errors (invalid ceilings)

use crcgen_spec::{
    ConfigError, DataWidth, ErrorCategory, Limits, PolynomialSpec, SpecError, HARD_WIDTH_CEILING,
};
use proptest::prelude::*;

// ============================================================================
// Range Errors
// ============================================================================

#[test]
fn test_data_width_boundaries() {
    let limits = Limits::DEFAULT;
    assert!(DataWidth::new(0, &limits).is_err());
    assert!(DataWidth::new(1, &limits).is_ok());
    assert!(DataWidth::new(1024, &limits).is_ok());
    assert!(DataWidth::new(1025, &limits).is_err());
}

#[test]
fn test_poly_width_boundaries() {
    let limits = Limits::DEFAULT;
    let wide = "f".repeat(256);
    assert!(PolynomialSpec::from_hex(&wide, 1024, &limits).is_ok());

    let err = PolynomialSpec::from_hex(&wide, 1025, &limits).unwrap_err();
    assert_eq!(err, SpecError::PolyWidthOutOfRange { value: 1025, max: 1024 });
    assert_eq!(err.category(), ErrorCategory::Range);
}

#[test]
fn test_raised_ceiling() {
    let limits = Limits::uniform(2048).unwrap();
    assert!(DataWidth::new(2048, &limits).is_ok());
    let wide = "1".repeat(512);
    assert!(PolynomialSpec::from_hex(&wide, 2048, &limits).is_ok());
}

// ============================================================================
// Format Errors
// ============================================================================

#[test]
fn test_poly_string_length_rule() {
    let limits = Limits::DEFAULT;
    // ceil(width / 4) digits are required
    for (width, required) in [(1, 1), (4, 1), (5, 2), (8, 2), (9, 3), (32, 8)] {
        let short = "0".repeat(required - 1);
        assert_eq!(
            PolynomialSpec::from_hex(&short, width, &limits).unwrap_err(),
            SpecError::PolyStringTooShort {
                len: required - 1,
                required
            },
            "width {}",
            width
        );
        let exact = "0".repeat(required);
        assert!(PolynomialSpec::from_hex(&exact, width, &limits).is_ok());
    }
}

#[test]
fn test_non_hex_string() {
    let err = PolynomialSpec::from_hex("zz", 5, &Limits::DEFAULT).unwrap_err();
    assert!(matches!(err, SpecError::InvalidHexDigit { digit: 'z', .. }));
    assert_eq!(err.category(), ErrorCategory::Format);

    let err = PolynomialSpec::from_hex("0x05", 5, &Limits::DEFAULT).unwrap_err();
    assert_eq!(
        err,
        SpecError::InvalidHexDigit {
            digit: 'x',
            position: 1
        }
    );
}

#[test]
fn test_expression_errors_are_format_errors() {
    for source in ["", "x^", "x^5+", "x^5++1", "2", "x^5+x^5", "y^3"] {
        let err = PolynomialSpec::from_expression(source, &Limits::DEFAULT).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Format, "source {:?}", source);
    }
}

#[test]
fn test_expression_matches_hex() {
    let limits = Limits::DEFAULT;
    let cases = [
        ("x^5+x^2+1", "05", 5),
        ("x^16+x^12+x^5+1", "1021", 16),
        ("x^8+x^2+x+1", "07", 8),
        (
            "x^32+x^26+x^23+x^22+x^16+x^12+x^11+x^10+x^8+x^7+x^5+x^4+x^2+x+1",
            "04C11DB7",
            32,
        ),
    ];
    for (expr, hex, width) in cases {
        assert_eq!(
            PolynomialSpec::from_expression(expr, &limits).unwrap(),
            PolynomialSpec::from_hex(hex, width, &limits).unwrap(),
            "{}",
            expr
        );
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

#[test]
fn test_invalid_ceiling() {
    assert_eq!(Limits::uniform(0).unwrap_err(), ConfigError::InvalidDataCeiling);
    assert_eq!(
        Limits::new(16, HARD_WIDTH_CEILING + 1).unwrap_err(),
        ConfigError::InvalidPolyCeiling
    );
    let err: SpecError = ConfigError::InvalidDataCeiling.into();
    assert_eq!(err.category(), ErrorCategory::Usage);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_hex_encoding_is_canonical(taps in prop::collection::vec(any::<bool>(), 1..200)) {
        let limits = Limits::DEFAULT;
        let poly = PolynomialSpec::from_taps(taps.clone(), &limits).unwrap();
        let hex = poly.to_hex();
        prop_assert_eq!(hex.len(), taps.len().div_ceil(4));
        let parsed = PolynomialSpec::from_hex(&hex, taps.len(), &limits).unwrap();
        prop_assert_eq!(parsed.taps(), &taps[..]);
    }

    #[test]
    fn prop_display_parses_back(taps in prop::collection::vec(any::<bool>(), 1..64)) {
        let limits = Limits::DEFAULT;
        let poly = PolynomialSpec::from_taps(taps, &limits).unwrap();
        let parsed = PolynomialSpec::from_expression(&poly.to_string(), &limits).unwrap();
        prop_assert_eq!(parsed, poly);
    }

    #[test]
    fn prop_leading_digits_do_not_change_taps(extra in "[0-9a-fA-F]{0,6}") {
        let limits = Limits::DEFAULT;
        let padded = format!("{}05", extra);
        let poly = PolynomialSpec::from_hex(&padded, 5, &limits).unwrap();
        prop_assert_eq!(poly.taps(), &[true, false, true, false, false][..]);
    }
}
