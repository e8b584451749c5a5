//! Whole-molecule pair masks.
//!
//! A pair `(i, j)` is real when both atoms are real. The diagonal-masked
//! variant additionally drops self pairs, which carry no meaning for pairwise
//! interaction sums.

use candle_core::{DType, Device, Tensor};

use super::atoms::real_atoms;
use crate::core::{checks, Result};

/// Outer AND of two `[batch, n]` masks: `out[b, i, j] = lhs[b, i] & rhs[b, j]`.
pub(crate) fn outer_and(lhs: &Tensor, rhs: &Tensor) -> Result<Tensor> {
    Ok(lhs.unsqueeze(2)?.broadcast_mul(&rhs.unsqueeze(1)?)?)
}

/// Construct a `[1, n, n]` mask that is `1` everywhere except the diagonal.
pub fn off_diagonal(n: usize, device: &Device) -> Result<Tensor> {
    let mut data = vec![1u8; n * n];
    for i in 0..n {
        data[i * n + i] = 0;
    }
    Ok(Tensor::from_vec(data, (1, n, n), device)?)
}

/// Mask of real pairs with the diagonal left at its natural value.
///
/// `mask[b, i, i]` equals the realness of atom `i`.
pub fn real_pairs_unmasked_diagonal(numbers: &Tensor) -> Result<Tensor> {
    checks::expect_rank(numbers, 2, "atomic numbers")?;
    let real = real_atoms(numbers)?;
    outer_and(&real, &real)
}

/// Mask of real pairs with every self pair `(i, i)` cleared.
pub fn real_pairs_masked_diagonal(numbers: &Tensor) -> Result<Tensor> {
    let pairs = real_pairs_unmasked_diagonal(numbers)?;
    let keep = off_diagonal(pairs.dim(2)?, pairs.device())?;
    Ok(pairs.broadcast_mul(&keep)?)
}

/// Number of set entries per batch entry of a `[batch, n, n]` pair mask.
pub fn pair_counts(mask: &Tensor) -> Result<Vec<u32>> {
    checks::expect_rank(mask, 3, "pair mask")?;
    Ok(mask.to_dtype(DType::U32)?.sum((1, 2))?.to_vec1::<u32>()?)
}
