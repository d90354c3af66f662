use collision_matrix::{
    evaluate, BitReverse, ByteHash, Identity, Multiplicative, Permutation, Xor,
};
use rand::{rngs::StdRng, SeedableRng};
use test_log::test;

#[test]
fn every_candidate_conserves_mass() -> collision_matrix::Result<()> {
    let permutation = Permutation::shuffled(&mut StdRng::seed_from_u64(5));

    let candidates: &[&dyn ByteHash] = &[
        &Identity,
        &permutation,
        &BitReverse,
        &Xor,
        &Multiplicative,
    ];

    for candidate in candidates {
        for bucket_count in [1, 2, 4, 16, 64, 256] {
            let matrix = evaluate(&Identity, *candidate, bucket_count)?;

            assert_eq!(256, matrix.total());
            assert!(matrix.cells().iter().all(|&cell| cell <= 256));
        }
    }

    Ok(())
}

#[test]
fn evaluate_is_deterministic() -> collision_matrix::Result<()> {
    let first = evaluate(&BitReverse, &Multiplicative, 16)?;
    let second = evaluate(&BitReverse, &Multiplicative, 16)?;

    assert_eq!(first, second);

    Ok(())
}
