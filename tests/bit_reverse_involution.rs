use collision_matrix::{BitReverse, ByteHash};
use test_log::test;

#[test]
fn bit_reverse_applied_twice_is_identity() {
    for x in 0..=u8::MAX {
        assert_eq!(x, BitReverse.hash(BitReverse.hash(x)));
    }
}
