//! Lightweight validation helpers shared by the mask builders.
//!
//! Each routine returns [`Result<()>`](crate::Result) so call sites can
//! propagate errors without panicking.

use candle_core::{DType, Tensor};

use super::{MaskError, Result};

/// Ensures a tensor has exactly `rank` dimensions.
pub fn expect_rank(tensor: &Tensor, rank: usize, what: &str) -> Result<()> {
    if tensor.rank() == rank {
        Ok(())
    } else {
        Err(MaskError::InvalidShape {
            context: format!(
                "{what}: expected rank {rank}, got shape {:?}",
                tensor.dims()
            ),
        })
    }
}

/// Checks the tensor holds integers candle can compare and index with.
pub fn expect_integer_dtype(tensor: &Tensor, what: &str) -> Result<()> {
    match tensor.dtype() {
        DType::U8 | DType::U32 | DType::I64 => Ok(()),
        other => Err(MaskError::UnsupportedDType {
            requested: format!("{other:?} for {what}"),
        }),
    }
}

/// Checks the leading (batch) dimension of `tensor` equals `batch`.
pub fn expect_batch(tensor: &Tensor, batch: usize, what: &str) -> Result<()> {
    let actual = tensor.dims().first().copied();
    if actual == Some(batch) {
        Ok(())
    } else {
        Err(MaskError::InvalidShape {
            context: format!("{what}: expected batch size {batch}, got shape {:?}", tensor.dims()),
        })
    }
}

/// Verifies every entry of a `[batch, k]` index tensor lies in `0..max_atoms`.
pub fn expect_indices_in_range(indices: &Tensor, max_atoms: usize, monomer: char) -> Result<()> {
    let rows = indices.to_dtype(DType::I64)?.to_vec2::<i64>()?;
    for (batch, row) in rows.iter().enumerate() {
        if let Some(&index) = row
            .iter()
            .find(|&&index| index < 0 || index as usize >= max_atoms)
        {
            return Err(MaskError::IndexOutOfRange {
                monomer,
                batch,
                index,
                max_atoms,
            });
        }
    }
    Ok(())
}
