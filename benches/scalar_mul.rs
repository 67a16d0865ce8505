use ecgroup::curves;

use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use num_traits::One;
use std::hint::black_box;

pub fn bench_scalar_mul(c: &mut Criterion) {
    let secp = curves::secp256r1();
    let secp_k = secp.order() - BigInt::one();
    c.bench_function("secp256r1 generator mul", |b| {
        let g = secp.generator();
        b.iter(|| black_box(&g) * black_box(&secp_k))
    });

    let edwards = curves::edwards25519();
    let edwards_k = edwards.order() - BigInt::one();
    c.bench_function("edwards25519 generator mul", |b| {
        let g = edwards.generator();
        b.iter(|| black_box(&g) * black_box(&edwards_k))
    });
}

pub fn bench_sec1_decode(c: &mut Criterion) {
    let curve = curves::secp256r1();
    let bytes = ecgroup::codecs::sec1::encode(&curve.generator(), true).unwrap();
    c.bench_function("secp256r1 sec1 decompress", |b| {
        b.iter(|| ecgroup::codecs::sec1::decode(curve, black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_scalar_mul, bench_sec1_decode);
criterion_main!(benches);
