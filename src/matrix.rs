// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{ByteHash, Error, Result};

/// Number of values in the input domain (all 8-bit values)
pub const DOMAIN_SIZE: usize = 256;

/// Pairwise bucket collision counts for two hash functions.
///
/// Cell `(i, j)` counts the inputs whose primary hash lands in bucket `i` and
/// whose secondary hash lands in bucket `j`. The grid is square and row-major,
/// with one row per primary bucket.
///
/// A matrix is fully populated by [`evaluate`] in a single pass over the input
/// domain and never mutated afterwards.
#[derive(Debug, Eq, PartialEq)]
pub struct CollisionMatrix {
    /// Row-major cell counts
    cells: Box<[u32]>,

    /// Grid side length
    bucket_count: usize,
}

impl CollisionMatrix {
    fn zeroed(bucket_count: usize) -> Result<Self> {
        if !bucket_count.is_power_of_two() || bucket_count > DOMAIN_SIZE {
            return Err(Error::InvalidBucketCount(bucket_count));
        }

        let vec = vec![0; bucket_count * bucket_count];

        Ok(Self {
            cells: vec.into_boxed_slice(),
            bucket_count,
        })
    }

    /// Grid side length (number of buckets per axis).
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Sum of all cells.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cells.iter().sum()
    }

    /// Row-major cell counts.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Returns the count in cell `(row, column)`.
    ///
    /// Both indices need to be less than the bucket count.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> u32 {
        // NOTE: We trust the caller
        #[allow(clippy::expect_used)]
        let cell = self
            .cells
            .get(row * self.bucket_count + column)
            .expect("should be in bounds");

        *cell
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.bucket_count)
    }

    /// Increments the count in cell `(row, column)`.
    fn bump(&mut self, row: usize, column: usize) {
        // NOTE: should be in bounds because of the bucket mask
        #[allow(clippy::expect_used)]
        let cell = self
            .cells
            .get_mut(row * self.bucket_count + column)
            .expect("should be in bounds");

        *cell += 1;
    }

    /// Renders the grid as a nested JSON array, row by row.
    #[must_use]
    pub fn to_json(&self) -> String {
        let rows = self
            .rows()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>()
                    .join(",");

                format!("[{cells}]")
            })
            .collect::<Vec<_>>()
            .join(",");

        format!("[{rows}]")
    }
}

/// Tallies which bucket pair every byte-domain input falls into.
///
/// Runs `hash1` and `hash2` over every value in `0..=255`, reduces both digests
/// to `bucket_count` buckets and counts each (bucket-of-hash1, bucket-of-hash2)
/// pair. The sum over the returned grid is always [`DOMAIN_SIZE`].
///
/// # Errors
///
/// Fails with [`Error::InvalidBucketCount`] if `bucket_count` is zero, not a
/// power of two, or larger than the input domain.
pub fn evaluate(
    hash1: &dyn ByteHash,
    hash2: &dyn ByteHash,
    bucket_count: usize,
) -> Result<CollisionMatrix> {
    let mut matrix = CollisionMatrix::zeroed(bucket_count)?;

    // NOTE: the mask is a modulo reduction because bucket_count is a power of two
    #[allow(clippy::cast_possible_truncation)]
    let mask = (bucket_count - 1) as u8;

    for x in 0..=u8::MAX {
        let bucket1 = hash1.hash(x) & mask;
        let bucket2 = hash2.hash(x) & mask;
        matrix.bump(usize::from(bucket1), usize::from(bucket2));
    }

    log::trace!(
        "evaluated {} vs {} over {DOMAIN_SIZE} inputs into {bucket_count}x{bucket_count} buckets",
        hash1.name(),
        hash2.name(),
    );

    Ok(matrix)
}
