//! Input size limits shared by the CLI and the server.

use crate::error::{AnalysisError, AnalysisResult};

/// Default maximum input size in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10_000;

/// Reject input longer than `max_bytes`. `None` disables the check.
pub const fn check_input_size(size: usize, max_bytes: Option<usize>) -> AnalysisResult<()> {
    match max_bytes {
        Some(limit) if size > limit => Err(AnalysisError::InputTooLarge { size, limit }),
        _ => Ok(()),
    }
}
