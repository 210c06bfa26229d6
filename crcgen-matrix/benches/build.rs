use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use crcgen_matrix::{build_with, BuildStrategy};
use crcgen_spec::{DataWidth, Limits, PolynomialSpec};

fn bench_strategies(c: &mut Criterion) {
    let limits = Limits::DEFAULT;
    let cases = [
        ("crc16-ccitt", "1021", 16),
        ("crc32", "04C11DB7", 32),
        ("crc64-ecma", "42F0E1EBA9EA3693", 64),
    ];

    let mut group = c.benchmark_group("build");
    for (name, hex, n) in cases {
        let poly = PolynomialSpec::from_hex(hex, n, &limits).unwrap();
        for m in [8, 64, 512] {
            let width = DataWidth::new(m, &limits).unwrap();
            for strategy in [BuildStrategy::Superposition, BuildStrategy::Squaring] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{}/{}", name, strategy), m),
                    &width,
                    |b, &width| b.iter(|| build_with(black_box(&poly), width, strategy)),
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
