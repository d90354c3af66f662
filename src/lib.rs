// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A K.I.S.S. evaluator for pairwise hash bucket collision matrices.
//!
//! ##### NOTE
//!
//! > This crate only computes the matrices, not the pictures.
//! > Color mapping and subplot layout are left to whatever plotting surface
//! > consumes the emitted grids (see the `cmx` tool and its JSONL output).
//!
//! ##### About
//!
//! Reducing a hash to one of `B` buckets throws away most of its bits, so two
//! hash functions that look very different can still funnel the same inputs into
//! the same buckets. A quick way to see this is to fix a "primary" hash, pick a
//! candidate "secondary" hash, run both over the whole 8-bit input domain
//! (0..=255) and tally which (primary bucket, secondary bucket) pair each input
//! lands in.
//!
//! The resulting `B x B` grid is a collision matrix: a diagonal stripe means the
//! candidate tracks the primary hash bucket for bucket, a flat grid means it
//! scatters the same inputs independently.
//!
//! Bucket reduction is a bitmask (`hash & (B - 1)`), so the bucket count must be
//! a power of two; anything else is rejected up front. The input domain is fixed
//! at the 256 byte values.
//!
//! ```
//! use collision_matrix::{evaluate, Identity, Xor};
//!
//! let matrix = evaluate(&Identity, &Xor, 16)?;
//!
//! // Every input lands in exactly one cell
//! assert_eq!(256, matrix.total());
//! # Ok::<_, collision_matrix::Error>(())
//! ```

#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]

mod candidate;
mod error;
mod matrix;

pub use candidate::{BitReverse, ByteHash, Identity, Multiplicative, Permutation, Xor};
pub use error::{Error, Result};
pub use matrix::{evaluate, CollisionMatrix, DOMAIN_SIZE};
