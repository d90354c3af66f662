// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{Error, Result};
use rand::{seq::SliceRandom, Rng};

/// Mask applied by [`Xor`]
const XOR_MASK: u8 = 0x2A;

/// Multiplier used by [`Multiplicative`]
const MULTIPLIER: u8 = 0x9E;

/// Calculates a bucket-ready digest from a byte-domain input.
pub trait ByteHash {
    /// Gets the readable hash function name (e.g. "Bit-Reverse")
    fn name(&self) -> &'static str;

    /// Hashes one byte-domain value to a byte digest
    fn hash(&self, x: u8) -> u8;
}

/// Leaves the input untouched.
pub struct Identity;

impl ByteHash for Identity {
    fn name(&self) -> &'static str {
        "Identity"
    }

    fn hash(&self, x: u8) -> u8 {
        x
    }
}

/// Reverses the low 8 bits of the input; an involution.
pub struct BitReverse;

impl ByteHash for BitReverse {
    fn name(&self) -> &'static str {
        "Bit-Reverse"
    }

    fn hash(&self, x: u8) -> u8 {
        x.reverse_bits()
    }
}

/// Flips a fixed set of input bits; a bijection.
pub struct Xor;

impl ByteHash for Xor {
    fn name(&self) -> &'static str {
        "XOR"
    }

    fn hash(&self, x: u8) -> u8 {
        x ^ XOR_MASK
    }
}

/// Multiplies by a fixed constant, keeping the low 8 bits.
///
/// The multiplier is even, so the digest's low bit is always zero and inputs
/// alias in pairs.
pub struct Multiplicative;

impl ByteHash for Multiplicative {
    fn name(&self) -> &'static str {
        "Multiplicative"
    }

    fn hash(&self, x: u8) -> u8 {
        x.wrapping_mul(MULTIPLIER)
    }
}

/// Looks the input up in a fixed bijective table over the byte domain.
///
/// The table is built once, usually by shuffling the identity table, and reused
/// for every evaluation in a run, so repeated evaluations stay comparable.
pub struct Permutation(Box<[u8; 256]>);

impl Permutation {
    /// Builds a permutation by shuffling the identity table once.
    #[must_use]
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut table = [0u8; 256];

        for (slot, x) in table.iter_mut().zip(0..=u8::MAX) {
            *slot = x;
        }

        table.shuffle(rng);

        Self(Box::new(table))
    }

    /// Wraps an existing lookup table.
    ///
    /// A table without duplicates covers all 256 digests, so checking for
    /// duplicates is enough to establish bijectivity.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPermutation`] if the table maps two inputs to
    /// the same digest.
    pub fn from_table(table: Box<[u8; 256]>) -> Result<Self> {
        let mut seen = [false; 256];

        for &digest in table.iter() {
            // NOTE: should be in bounds because the domain is exactly 256 wide
            #[allow(clippy::expect_used)]
            let slot = seen
                .get_mut(usize::from(digest))
                .expect("should be in bounds");

            if *slot {
                return Err(Error::InvalidPermutation);
            }

            *slot = true;
        }

        Ok(Self(table))
    }
}

impl ByteHash for Permutation {
    fn name(&self) -> &'static str {
        "Random Permutation"
    }

    fn hash(&self, x: u8) -> u8 {
        // NOTE: should be in bounds because the table spans the whole domain
        #[allow(clippy::expect_used)]
        let digest = self.0.get(usize::from(x)).expect("should be in bounds");

        *digest
    }
}
