//! Per-atom validity flags.

use candle_core::Tensor;

use crate::core::{checks, Result};

/// Atomic number stored in padding slots.
///
/// Rows of an atomic-number batch are padded to the common `max_atoms` with
/// this value; any other value is the atomic number of a real atom.
pub const PADDING_NUMBER: u32 = 0;

/// Flag real (non-padding) atoms of an atomic-number tensor.
///
/// The result keeps the input shape and has dtype
/// [`MASK_DTYPE`](super::MASK_DTYPE).
pub fn real_atoms(numbers: &Tensor) -> Result<Tensor> {
    checks::expect_integer_dtype(numbers, "atomic numbers")?;
    Ok(numbers.ne(PADDING_NUMBER)?)
}
