//! Run-time knobs for [`PairMaskBuilder`](crate::PairMaskBuilder).

use serde::{Deserialize, Serialize};

/// Configuration driving pair-mask construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Check monomer index sets against the atomic-number batch before
    /// scattering them.
    ///
    /// Covers batch-size agreement and index bounds. When disabled, malformed
    /// inputs surface as [`MaskError::Backend`](crate::MaskError::Backend)
    /// errors raised by candle itself.
    pub validate_inputs: bool,

    /// Emit per-batch pair counts at `debug` level in monomer mode.
    ///
    /// Only evaluated when the installed logger enables `debug` for this crate.
    pub log_pair_counts: bool,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            validate_inputs: true,
            log_pair_counts: true,
        }
    }
}
