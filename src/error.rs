// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur while building a collision matrix
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// Bucket count is zero, not a power of two, or wider than the input domain
    InvalidBucketCount(usize),

    /// Lookup table is not a bijection over the byte domain
    InvalidPermutation,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CollisionMatrixError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Evaluator result
pub type Result<T> = std::result::Result<T, Error>;
