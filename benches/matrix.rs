use collision_matrix::{
    evaluate, BitReverse, ByteHash, Identity, Multiplicative, Permutation, Xor,
};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn evaluate_candidates(c: &mut Criterion) {
    let permutation = Permutation::shuffled(&mut StdRng::seed_from_u64(0));

    let candidates: &[&dyn ByteHash] = &[
        &Identity,
        &permutation,
        &BitReverse,
        &Xor,
        &Multiplicative,
    ];

    for candidate in candidates {
        c.bench_function(&format!("evaluate identity vs {}", candidate.name()), |b| {
            b.iter(|| {
                evaluate(&Identity, *candidate, 16).expect("bucket count is valid");
            });
        });
    }
}

criterion_group!(benches, evaluate_candidates);
criterion_main!(benches);
