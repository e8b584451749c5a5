//! Error types emitted by the mask builders.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MaskError>;

/// Mask-specific error category.
#[derive(Debug, Error)]
pub enum MaskError {
    /// The supplied tensor shapes do not align with the documented contract.
    #[error("invalid tensor shape for {context}")]
    InvalidShape { context: String },

    /// A monomer index points past the `max_atoms` axis (or is negative).
    #[error(
        "monomer {monomer} index {index} in batch entry {batch} is outside 0..{max_atoms}"
    )]
    IndexOutOfRange {
        monomer: char,
        batch: usize,
        index: i64,
        max_atoms: usize,
    },

    /// Atomic numbers and monomer indices must be integer tensors.
    #[error("unsupported dtype {requested}")]
    UnsupportedDType { requested: String },

    /// The requested combination of pair-mask options is not wired up.
    #[error("unsupported pair mode: {0}")]
    UnsupportedMode(&'static str),

    /// A candle failure propagated to the caller.
    #[error(transparent)]
    Backend(#[from] candle_core::Error),
}
