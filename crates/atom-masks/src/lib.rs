//! Padding-aware masks for batched, zero-padded molecules.
//!
//! Molecules with differing atom counts are rectangularized into an
//! atomic-number tensor of layout `[batch, max_atoms]`, with the tail of each
//! row filled by [`PADDING_NUMBER`]. The builders in this crate turn such a
//! batch into masks that downstream pairwise kernels (distances, energies,
//! forces) multiply into their `[batch, max_atoms, max_atoms]` terms.
//!
//! Candle has no boolean dtype, so every mask is a `u8` tensor holding `0` or
//! `1` (see [`MASK_DTYPE`]). Pair masks come in three flavours selected by
//! [`PairMode`]:
//!
//! * whole molecule with the diagonal masked (self pairs removed),
//! * whole molecule with the diagonal left at its natural value,
//! * cross pairs between two monomers, counted in both triangles.
//!
//! [`real_pairs`] is the loose entry point that infers the mode from optional
//! monomer index sets; [`PairMaskBuilder`] takes the mode explicitly.

pub mod core;
pub mod masks;

pub use self::core::{MaskConfig, MaskError, Result};
pub use masks::{
    monomer_masks, monomer_pairs, off_diagonal, pair_counts, real_atoms, real_pairs,
    real_pairs_masked_diagonal, real_pairs_unmasked_diagonal, MonomerPair, PairMaskBuilder,
    PairMode, MASK_DTYPE, PADDING_NUMBER,
};
