use criterion::{Criterion, criterion_group, criterion_main};
use matsum_core::{HOST_MATRIX, reference_sum};

fn bench_reference_sum(c: &mut Criterion) {
    c.bench_function("reference_sum_512x512", |b| {
        b.iter(|| {
            let total = reference_sum(HOST_MATRIX.as_slice());
            assert_eq!(total, 66_977_792);
        });
    });
}

// Diese beiden Makros sind notwendig, damit Criterion den Benchmark ausführt
criterion_group!(benches, bench_reference_sum);
criterion_main!(benches);
