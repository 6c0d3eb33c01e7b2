use x25519_core::keys::x25519::{generate_private_key, scalarmult_base};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_scalarmult_base(c: &mut Criterion) {
    let k = generate_private_key();

    c.bench_function("scalarmult_base", |b| {
        b.iter(|| scalarmult_base(black_box(&k)))
    });
}

pub fn bench_generate_private_key(c: &mut Criterion) {
    c.bench_function("generate_private_key", |b| b.iter(generate_private_key));
}

criterion_group!(benches, bench_scalarmult_base, bench_generate_private_key);
criterion_main!(benches);
