//! Cross-pair masks between two monomers of each batch entry.
//!
//! Monomer index sets are `[batch, k]` integer tensors listing, per batch
//! entry, the atom positions (along `max_atoms`) owned by monomer A or B. They
//! are scattered into `[batch, max_atoms]` masks; positions not listed stay
//! unset.
//!
//! Index lists for monomer B are padded with `0` upstream, so position `0` is
//! never attributed to monomer B. Monomer A keeps position `0`: it owns the
//! first atom whenever that atom is real. Callers must therefore never place
//! a genuine monomer-B atom at index `0`.
//!
//! Every unordered cross pair is set at both `(i, j)` and `(j, i)`; sums over
//! the mask are expected to be scaled by `0.5` downstream.

use candle_core::{DType, Tensor};

use super::atoms::real_atoms;
use super::pairs::{outer_and, pair_counts};
use crate::core::{checks, MaskConfig, Result};

/// Borrowed index sets for the two interacting monomers.
#[derive(Debug, Clone, Copy)]
pub struct MonomerPair<'a> {
    pub a: &'a Tensor,
    pub b: &'a Tensor,
}

impl<'a> MonomerPair<'a> {
    pub fn new(a: &'a Tensor, b: &'a Tensor) -> Self {
        Self { a, b }
    }

    /// The same monomers with roles exchanged.
    pub fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

fn scatter_flags(template: &Tensor, indices: &Tensor) -> Result<Tensor> {
    let hits = Tensor::ones(indices.shape(), DType::U32, indices.device())?;
    let counts = Tensor::zeros(template.shape(), DType::U32, template.device())?
        .scatter_add(indices, &hits, 1)?;
    // Duplicate indices accumulate; any hit marks membership.
    Ok(counts.gt(0u32)?)
}

fn clear_first_atom(mask: &Tensor) -> Result<Tensor> {
    let n = mask.dim(1)?;
    let mut keep = vec![1u8; n];
    if let Some(first) = keep.first_mut() {
        *first = 0;
    }
    let keep = Tensor::from_vec(keep, (1, n), mask.device())?;
    Ok(mask.broadcast_mul(&keep)?)
}

fn row_population(mask: &Tensor) -> Result<Vec<u32>> {
    Ok(mask.to_dtype(DType::U32)?.sum(1)?.to_vec1::<u32>()?)
}

fn check_monomers(real: &Tensor, monomers: &MonomerPair<'_>) -> Result<()> {
    let (batch, max_atoms) = real.dims2()?;
    for (label, indices) in [('A', monomers.a), ('B', monomers.b)] {
        let what = format!("monomer {label} indices");
        checks::expect_integer_dtype(indices, &what)?;
        checks::expect_rank(indices, 2, &what)?;
        checks::expect_batch(indices, batch, &what)?;
        checks::expect_indices_in_range(indices, max_atoms, label)?;
    }
    Ok(())
}

pub(crate) fn build_monomer_masks(
    real: &Tensor,
    monomers: &MonomerPair<'_>,
    config: &MaskConfig,
) -> Result<(Tensor, Tensor)> {
    if config.validate_inputs {
        check_monomers(real, monomers)?;
    }
    let mask_a = scatter_flags(real, monomers.a)?;
    let mask_b = clear_first_atom(&scatter_flags(real, monomers.b)?)?;
    Ok((mask_a, mask_b))
}

pub(crate) fn build_monomer_pairs(
    numbers: &Tensor,
    monomers: &MonomerPair<'_>,
    config: &MaskConfig,
) -> Result<Tensor> {
    checks::expect_rank(numbers, 2, "atomic numbers")?;
    let real = real_atoms(numbers)?;
    let (mask_a, mask_b) = build_monomer_masks(&real, monomers, config)?;

    let ab = outer_and(&mask_a, &mask_b)?;
    let ba = outer_and(&mask_b, &mask_a)?;
    let mask = ab.maximum(&ba)?;

    if config.log_pair_counts && log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "monomer pair mask: atoms in A={:?} B={:?}, pairs per entry={:?}",
            row_population(&mask_a)?,
            row_population(&mask_b)?,
            pair_counts(&mask)?
        );
    }
    Ok(mask)
}

/// Scatter both monomer index sets into `[batch, max_atoms]` masks.
///
/// `real` is the output of [`real_atoms`] and only supplies shape and device.
/// Position `0` is cleared in the monomer-B mask.
pub fn monomer_masks(real: &Tensor, monomers: MonomerPair<'_>) -> Result<(Tensor, Tensor)> {
    checks::expect_rank(real, 2, "real atom mask")?;
    build_monomer_masks(real, &monomers, &MaskConfig::default())
}

/// Mask of cross pairs between monomer A and monomer B.
///
/// `mask[b, i, j]` is set when one of `i`, `j` belongs to A and the other to
/// B. The result is symmetric and invariant under swapping A and B.
pub fn monomer_pairs(numbers: &Tensor, monomers: MonomerPair<'_>) -> Result<Tensor> {
    build_monomer_pairs(numbers, &monomers, &MaskConfig::default())
}
