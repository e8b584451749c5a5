//! Pair-mask mode selection.

use candle_core::Tensor;

use super::monomer::{build_monomer_pairs, MonomerPair};
use super::pairs::{real_pairs_masked_diagonal, real_pairs_unmasked_diagonal};
use crate::core::{MaskConfig, MaskError, Result};

/// Which pairs a pair mask keeps.
#[derive(Debug, Clone, Copy)]
pub enum PairMode<'a> {
    /// All pairs of real atoms, optionally without self pairs.
    WholeMolecule { mask_diagonal: bool },
    /// Cross pairs between two monomers.
    ///
    /// Only `mask_diagonal: true` is supported; the other combination is
    /// rejected with [`MaskError::UnsupportedMode`].
    MonomerRestricted {
        mask_diagonal: bool,
        monomers: MonomerPair<'a>,
    },
}

impl<'a> PairMode<'a> {
    /// Pick the mode from optionally supplied monomer index sets.
    ///
    /// Monomer restriction needs both sets; a lone set is ignored with a
    /// warning.
    pub fn infer(
        mask_diagonal: bool,
        mon_a: Option<&'a Tensor>,
        mon_b: Option<&'a Tensor>,
    ) -> Self {
        match (mon_a, mon_b) {
            (Some(a), Some(b)) => Self::MonomerRestricted {
                mask_diagonal,
                monomers: MonomerPair::new(a, b),
            },
            (None, None) => Self::WholeMolecule { mask_diagonal },
            (Some(_), None) | (None, Some(_)) => {
                log::warn!(
                    "only one monomer index set supplied; building a whole-molecule pair mask"
                );
                Self::WholeMolecule { mask_diagonal }
            }
        }
    }
}

impl Default for PairMode<'_> {
    fn default() -> Self {
        Self::WholeMolecule {
            mask_diagonal: true,
        }
    }
}

/// Builds `[batch, max_atoms, max_atoms]` pair masks for a configured mode.
#[derive(Debug, Clone, Default)]
pub struct PairMaskBuilder {
    config: MaskConfig,
}

impl PairMaskBuilder {
    pub fn new(config: MaskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Build the pair mask of `numbers` (`[batch, max_atoms]`) under `mode`.
    pub fn build(&self, numbers: &Tensor, mode: PairMode<'_>) -> Result<Tensor> {
        log::trace!("pair mask: shape={:?} mode={:?}", numbers.dims(), mode);
        match mode {
            PairMode::WholeMolecule {
                mask_diagonal: true,
            } => real_pairs_masked_diagonal(numbers),
            PairMode::WholeMolecule {
                mask_diagonal: false,
            } => real_pairs_unmasked_diagonal(numbers),
            PairMode::MonomerRestricted {
                mask_diagonal: true,
                monomers,
            } => build_monomer_pairs(numbers, &monomers, &self.config),
            PairMode::MonomerRestricted {
                mask_diagonal: false,
                ..
            } => Err(MaskError::UnsupportedMode(
                "monomer-restricted pair masks require a masked diagonal",
            )),
        }
    }
}

/// Create a pair mask from atomic numbers, discerning padding and real atoms.
///
/// With `mask_diagonal` set, self pairs are cleared; supplying both
/// `mon_a` and `mon_b` then restricts the mask to cross pairs between the two
/// monomers. Monomer sets combined with `mask_diagonal == false` are rejected
/// with [`MaskError::UnsupportedMode`].
pub fn real_pairs(
    numbers: &Tensor,
    mask_diagonal: bool,
    mon_a: Option<&Tensor>,
    mon_b: Option<&Tensor>,
) -> Result<Tensor> {
    PairMaskBuilder::default().build(numbers, PairMode::infer(mask_diagonal, mon_a, mon_b))
}
