use collision_matrix::{evaluate, Identity, Permutation};
use rand::{rngs::StdRng, SeedableRng};
use test_log::test;

#[test]
fn permutation_yields_stable_matrices_within_a_run() -> collision_matrix::Result<()> {
    let permutation = Permutation::shuffled(&mut StdRng::seed_from_u64(42));

    let first = evaluate(&Identity, &permutation, 16)?;
    let second = evaluate(&Identity, &permutation, 16)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn permutation_covers_every_bucket_once_at_full_width() -> collision_matrix::Result<()> {
    let permutation = Permutation::shuffled(&mut StdRng::seed_from_u64(42));

    let matrix = evaluate(&Identity, &permutation, 256)?;

    for row in matrix.rows() {
        assert_eq!(1, row.iter().sum::<u32>());
    }

    Ok(())
}
