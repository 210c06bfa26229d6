//! Widths near the default ceiling

use crcgen_hdl::{emit, Dialect};
use crcgen_matrix::{build_with, simulate, BitVector, BuildStrategy};
use crcgen_spec::{DataWidth, Limits, PolynomialSpec};

fn wide_polynomial(width: usize) -> PolynomialSpec {
    // Sparse pattern with the constant term set
    let taps: Vec<bool> = (0..width).map(|i| i == 0 || i % 7 == 3 || i % 13 == 5).collect();
    PolynomialSpec::from_taps(taps, &Limits::DEFAULT).unwrap()
}

#[test]
fn test_max_width_register_and_bus() {
    let limits = Limits::DEFAULT;
    let poly = wide_polynomial(limits.max_poly_width);
    let width = DataWidth::new(limits.max_data_width, &limits).unwrap();
    let matrix = build_with(&poly, width, BuildStrategy::Squaring);

    assert_eq!(matrix.row_count(), 2048);
    assert_eq!(matrix.poly_width(), 1024);

    let stream: Vec<bool> = (0..1024).map(|i| i % 3 == 0).collect();
    let stream = BitVector::from_bools(&stream);
    let state = BitVector::unit(1024, 1023);
    assert_eq!(
        matrix.apply(&state, &stream.reversed()),
        simulate(&poly, state.clone(), &stream)
    );
}

#[test]
fn test_wide_bus_narrow_register() {
    let limits = Limits::DEFAULT;
    let poly = PolynomialSpec::from_hex("1021", 16, &limits).unwrap();
    let width = DataWidth::new(1024, &limits).unwrap();

    let a = build_with(&poly, width, BuildStrategy::Superposition);
    let b = build_with(&poly, width, BuildStrategy::Squaring);
    assert_eq!(a, b);

    let text = emit(&a, &poly, Dialect::Verilog);
    assert_eq!(text.matches("lfsr_c[").count(), 16);
    assert!(text.contains("parameter INPUT_WIDTH  = 1024,"));
}

#[test]
fn test_wide_register_narrow_bus() {
    let limits = Limits::DEFAULT;
    let poly = wide_polynomial(512);
    let width = DataWidth::new(1, &limits).unwrap();

    let a = build_with(&poly, width, BuildStrategy::Superposition);
    let b = build_with(&poly, width, BuildStrategy::Squaring);
    assert_eq!(a, b);

    let text = emit(&a, &poly, Dialect::Vhdl);
    assert!(text.contains("    lfsr_c(511) <= lfsr_q(510);\n"));
}

#[test]
fn test_custom_ceiling_admits_larger_widths() {
    let limits = Limits::uniform(2048).unwrap();
    let poly = PolynomialSpec::from_taps(vec![true; 2048], &limits).unwrap();
    assert!(PolynomialSpec::from_taps(vec![true; 2048], &Limits::DEFAULT).is_err());
    let matrix = build_with(&poly, DataWidth::new(8, &limits).unwrap(), BuildStrategy::Squaring);
    assert_eq!(matrix.row_count(), 2056);
}
