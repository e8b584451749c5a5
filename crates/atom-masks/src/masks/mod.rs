//! Mask builders for zero-padded atom batches.
//!
//! Atom masks are shaped `[batch, max_atoms]` and pair masks
//! `[batch, max_atoms, max_atoms]`. Both use [`MASK_DTYPE`] with `1` for keep
//! and `0` for discard, so they compose with `broadcast_mul` and
//! `maximum` in the same way boolean AND/OR would.

pub mod atoms;
pub mod dispatch;
pub mod monomer;
pub mod pairs;

use candle_core::DType;

/// Dtype shared by all masks; matches what candle comparisons return.
pub const MASK_DTYPE: DType = DType::U8;

pub use atoms::{real_atoms, PADDING_NUMBER};
pub use dispatch::{real_pairs, PairMaskBuilder, PairMode};
pub use monomer::{monomer_masks, monomer_pairs, MonomerPair};
pub use pairs::{
    off_diagonal, pair_counts, real_pairs_masked_diagonal, real_pairs_unmasked_diagonal,
};
