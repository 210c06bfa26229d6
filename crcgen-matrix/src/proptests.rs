//! Property tests tying the matrix to the serial register

use proptest::prelude::*;

use crcgen_spec::{DataWidth, Limits, PolynomialSpec};

use crate::{build, build_with, probe_data, simulate, BitVector, BuildStrategy};

/// (taps, data width, initial state, data stream)
fn case() -> impl Strategy<Value = (Vec<bool>, usize, Vec<bool>, Vec<bool>)> {
    (1usize..40, 1usize..40).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(any::<bool>(), n),
            Just(m),
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(any::<bool>(), m),
        )
    })
}

fn setup(taps: Vec<bool>, m: usize) -> (PolynomialSpec, DataWidth) {
    let limits = Limits::DEFAULT;
    (
        PolynomialSpec::from_taps(taps, &limits).unwrap(),
        DataWidth::new(m, &limits).unwrap(),
    )
}

proptest! {
    #[test]
    fn prop_deterministic((taps, m, _, _) in case()) {
        let (poly, width) = setup(taps, m);
        prop_assert_eq!(build(&poly, width), build(&poly, width));
    }

    #[test]
    fn prop_matches_serial_register((taps, m, state, stream) in case()) {
        let (poly, width) = setup(taps, m);
        let matrix = build(&poly, width);

        let state = BitVector::from_bools(&state);
        let stream = BitVector::from_bools(&stream);
        let serial = simulate(&poly, state.clone(), &stream);

        // Stream step j is data bus bit M - 1 - j
        prop_assert_eq!(matrix.apply(&state, &stream.reversed()), serial.clone());

        let word = stream.reversed();
        for column in matrix.columns() {
            prop_assert_eq!(column.evaluate(&state, &word), serial.get(column.bit));
        }
    }

    #[test]
    fn prop_state_block_ignores_data((taps, m, _, stream) in case()) {
        let (poly, width) = setup(taps, m);
        let matrix = build(&poly, width);
        let n = poly.width();
        let stream = BitVector::from_bools(&stream);

        let data_only = simulate(&poly, BitVector::zeros(n), &stream);
        for i in 0..n {
            let mut contribution = simulate(&poly, BitVector::unit(n, i), &stream);
            contribution ^= &data_only;
            prop_assert_eq!(&contribution, matrix.state_row(i));
        }
    }

    #[test]
    fn prop_data_block_is_permutation_of_probes((taps, m, _, _) in case()) {
        let (poly, width) = setup(taps, m);
        let matrix = build(&poly, width);

        let mut probes: Vec<BitVector> = (0..m).map(|step| probe_data(&poly, step, m)).collect();
        for (step, probe) in probes.iter().enumerate() {
            prop_assert_eq!(matrix.data_row(m - 1 - step), probe);
        }

        let mut rows = matrix.data_block().to_vec();
        let key = |v: &BitVector| v.to_bools();
        rows.sort_by_key(key);
        probes.sort_by_key(key);
        prop_assert_eq!(rows, probes);
    }

    #[test]
    fn prop_strategies_agree((taps, m, _, _) in case()) {
        let (poly, width) = setup(taps, m);
        prop_assert_eq!(
            build_with(&poly, width, BuildStrategy::Superposition),
            build_with(&poly, width, BuildStrategy::Squaring)
        );
    }
}
